//! Page composition: landing, documentation and not-found views.

use chrono::Datelike;
use setup_blog_core::{NavLink, Section};

use crate::config::SocialSettings;
use crate::routes::{self, View};
use crate::toc::Sidebar;

pub const LANDING_HEADING: &str = "Home Page";
pub const LANDING_CARD_TITLE: &str = "Go to blog page";
pub const LANDING_CONTROL_LABEL: &str = "Blog";
pub const DOCS_HEADER: &str = "How to set up a server from scratch";
pub const FOOTER_BRAND: &str = "Server Setup Blog";
pub const NOT_FOUND_TITLE: &str = "Page not found";

/// Footer line for `year`.
pub fn footer_text(year: i32) -> String {
    format!("© {} — {}", year, FOOTER_BRAND)
}

/// Year used by the footer, read at render time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingPage {
    pub heading: &'static str,
    pub card_title: &'static str,
    /// The card's only control
    pub control: NavLink,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub text: String,
    pub social: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentationPage<'a> {
    pub header: &'static str,
    pub sidebar: Sidebar,
    /// Main area, drawn in this order with a separator after each
    pub sections: &'a [Section],
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundPage {
    pub title: &'static str,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page<'a> {
    Landing(LandingPage),
    Documentation(DocumentationPage<'a>),
    NotFound(NotFoundPage),
}

impl Page<'_> {
    pub fn view(&self) -> View {
        match self {
            Page::Landing(_) => View::Landing,
            Page::Documentation(_) => View::Documentation,
            Page::NotFound(_) => View::NotFound,
        }
    }
}

pub fn landing() -> LandingPage {
    LandingPage {
        heading: LANDING_HEADING,
        card_title: LANDING_CARD_TITLE,
        control: NavLink::new(LANDING_CONTROL_LABEL, routes::BLOG_PATH),
    }
}

pub fn documentation<'a>(
    sections: &'a [Section],
    social: &SocialSettings,
    year: i32,
) -> DocumentationPage<'a> {
    DocumentationPage {
        header: DOCS_HEADER,
        sidebar: Sidebar::build(sections),
        sections,
        footer: Footer {
            text: footer_text(year),
            social: social.links(),
        },
    }
}

/// Resolve `path` and build the page it shows.
pub fn compose<'a>(
    path: &str,
    sections: &'a [Section],
    social: &SocialSettings,
    year: i32,
) -> Page<'a> {
    match routes::resolve(path) {
        View::Landing => Page::Landing(landing()),
        View::Documentation => Page::Documentation(documentation(sections, social, year)),
        View::NotFound => Page::NotFound(NotFoundPage {
            title: NOT_FOUND_TITLE,
            path: path.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use setup_blog_core::Block;

    fn sections() -> Vec<Section> {
        vec![
            Section::new("stage-a1", "Stage A1 - Server Creation")
                .with_blocks(vec![Block::Summary { text: "done".into() }]),
            Section::new("stage-a2", "Stage A2 - First Login & Harden")
                .with_blocks(vec![Block::Summary { text: "done".into() }]),
        ]
    }

    #[test]
    fn test_footer_text() {
        assert_eq!(footer_text(2025), "© 2025 — Server Setup Blog");
    }

    #[test]
    fn test_landing_links_to_blog() {
        let page = compose("/", &[], &SocialSettings::default(), 2025);
        match page {
            Page::Landing(landing) => {
                assert_eq!(landing.heading, "Home Page");
                assert_eq!(landing.control.label, "Blog");
                assert_eq!(landing.control.path, "/blog");
            }
            other => panic!("expected landing, got {:?}", other),
        }
    }

    #[test]
    fn test_documentation_composes_sections_and_footer() {
        let sections = sections();
        let page = compose("/blog", &sections, &SocialSettings::default(), 2031);
        let Page::Documentation(doc) = page else {
            panic!("expected documentation");
        };
        assert_eq!(doc.header, DOCS_HEADER);
        assert_eq!(doc.sections[0].title, "Stage A1 - Server Creation");
        assert_eq!(doc.sidebar.entries().len(), 2);
        assert_eq!(doc.footer.text, "© 2031 — Server Setup Blog");
        assert!(doc.footer.social.is_empty());
    }

    #[test]
    fn test_documentation_footer_social_links() {
        let social = SocialSettings {
            twitter_tag: "setupblog".into(),
            telegram_tag: String::new(),
        };
        let page = documentation(&[], &social, 2025);
        assert_eq!(page.footer.social.len(), 1);
        assert!(page.sidebar.is_placeholder());
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let page = compose("/totally-unknown-path", &[], &SocialSettings::default(), 2025);
        assert_eq!(page.view(), View::NotFound);
        if let Page::NotFound(nf) = page {
            assert_eq!(nf.path, "/totally-unknown-path");
            assert_eq!(nf.title, NOT_FOUND_TITLE);
        }
    }

    #[test]
    fn test_current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
