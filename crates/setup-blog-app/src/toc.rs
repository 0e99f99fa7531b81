//! Table of contents / section renderer model
//!
//! A pure function of the section list: one sidebar anchor per section, in
//! input order. Nothing is sorted or filtered.

use setup_blog_core::Section;

/// Label above the sidebar entries.
pub const TOC_TITLE: &str = "Contents";

/// Shown in the sidebar when there are no sections.
pub const TOC_PLACEHOLDER: &str = "No sections to show yet.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub title: String,
    /// `#<section id>`
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sidebar {
    Placeholder(&'static str),
    Entries(Vec<TocEntry>),
}

impl Sidebar {
    pub fn build(sections: &[Section]) -> Self {
        if sections.is_empty() {
            return Sidebar::Placeholder(TOC_PLACEHOLDER);
        }
        Sidebar::Entries(
            sections
                .iter()
                .map(|section| TocEntry {
                    title: section.title.clone(),
                    href: section.anchor(),
                })
                .collect(),
        )
    }

    pub fn entries(&self) -> &[TocEntry] {
        match self {
            Sidebar::Entries(entries) => entries,
            Sidebar::Placeholder(_) => &[],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Sidebar::Placeholder(_))
    }
}

/// Index of the section an `#id` anchor points at.
pub fn find_anchor(sections: &[Section], href: &str) -> Option<usize> {
    let id = href.strip_prefix('#')?;
    sections.iter().position(|section| section.id == id)
}

/// First visible row after jumping to a heading at `heading_row`, keeping
/// `margin_rows` above it.
pub fn scroll_target(heading_row: usize, margin_rows: usize) -> usize {
    heading_row.saturating_sub(margin_rows)
}
