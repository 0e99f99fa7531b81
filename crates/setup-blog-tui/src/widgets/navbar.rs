//! Navigation bar
//!
//! Home control and site name on the left, then either the inline links
//! (expanded) or the menu trigger (compact), and the account control on
//! the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use setup_blog_app::nav::{NavBarModel, NavLayout};

use crate::theme::{palette, styles};

pub const HOME_GLYPH: &str = "⌂";
pub const MENU_GLYPH: &str = "☰";

pub struct NavBar<'a> {
    model: &'a NavBarModel,
    site_name: &'a str,
    account_open: bool,
}

impl<'a> NavBar<'a> {
    pub fn new(model: &'a NavBarModel, site_name: &'a str) -> Self {
        Self {
            model,
            site_name,
            account_open: false,
        }
    }

    pub fn account_open(mut self, open: bool) -> Self {
        self.account_open = open;
        self
    }

    fn home_spans(&self) -> Vec<Span<'a>> {
        vec![
            Span::styled(format!(" {} ", HOME_GLYPH), styles::accent_bold()),
            Span::styled(self.site_name, styles::page_title()),
            Span::styled(" [h]", styles::keybinding()),
        ]
    }

    fn link_spans(&self) -> Vec<Span<'a>> {
        match &self.model.layout {
            NavLayout::Expanded { links } => links
                .iter()
                .enumerate()
                .flat_map(|(i, item)| {
                    let style = if item.is_selected() {
                        styles::link_selected()
                    } else {
                        styles::link_default()
                    };
                    [
                        Span::styled(format!("[{}] ", i + 1), styles::keybinding()),
                        Span::styled(item.label.clone(), style),
                        Span::raw("   "),
                    ]
                })
                .collect(),
            NavLayout::Compact { overlay } => {
                let style = if overlay.is_some() {
                    styles::accent_bold()
                } else {
                    styles::link_default()
                };
                vec![
                    Span::styled(format!("{} Menu", MENU_GLYPH), style),
                    Span::styled(" [m]", styles::keybinding()),
                ]
            }
        }
    }

    fn account_spans(&self) -> Vec<Span<'a>> {
        let style = if self.account_open {
            styles::focused_selected()
        } else {
            styles::link_default()
        };
        vec![
            Span::styled("[a] ", styles::keybinding()),
            Span::styled("Account", style),
            Span::raw(" "),
        ]
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::APP_BAR_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // single content row, vertically centred
        let row = Rect {
            y: inner.y + (inner.height - 1) / 2,
            height: 1,
            ..inner
        };

        let home = Line::from(self.home_spans());
        let home_width = home.width() as u16;
        buf.set_line(row.x, row.y, &home, row.width);

        let account = Line::from(self.account_spans());
        let account_width = account.width() as u16;
        let account_x = row.right().saturating_sub(account_width);
        let account_fits = account_x >= row.x + home_width + 2;
        if account_fits {
            buf.set_line(account_x, row.y, &account, account_width);
        }

        let links_x = row.x + home_width + 3;
        let links_end = if account_fits { account_x } else { row.right() };
        if links_x < links_end {
            let links = Line::from(self.link_spans());
            buf.set_line(links_x, row.y, &links, links_end - links_x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use setup_blog_app::nav::{NavMenuState, ViewportState};
    use setup_blog_core::NavLink;

    fn links() -> Vec<NavLink> {
        vec![NavLink::new("Blog", "/blog"), NavLink::new("Guides", "/guides")]
    }

    fn model(width_px: u32, path: &str, open: bool) -> NavBarModel {
        let viewport = ViewportState::new(width_px, 960);
        let mut menu = NavMenuState::new();
        if open {
            menu.open(0);
        }
        NavBarModel::build(&links(), path, &viewport, &menu)
    }

    #[test]
    fn test_expanded_shows_inline_links() {
        let model = model(1200, "/blog", false);
        let mut term = TestTerminal::with_size(100, 3);
        term.render_widget(NavBar::new(&model, "Server Setup Blog"), term.area());

        assert!(term.line_contains(1, "Server Setup Blog"));
        assert!(term.line_contains(1, "[1] Blog"));
        assert!(term.line_contains(1, "[2] Guides"));
        assert!(!term.buffer_contains("Menu"));
        assert!(term.buffer_contains(HOME_GLYPH));
    }

    #[test]
    fn test_selected_link_is_highlighted() {
        let model = model(1200, "/blog", false);
        let mut term = TestTerminal::with_size(100, 3);
        term.render_widget(NavBar::new(&model, "Site"), term.area());

        let blog = term.find_in_line(1, "Blog").unwrap();
        assert_eq!(term.buffer()[(blog, 1)].fg, palette::ACCENT);

        let guides = term.find_in_line(1, "Guides").unwrap();
        assert_eq!(term.buffer()[(guides, 1)].fg, palette::TEXT_PRIMARY);
    }

    #[test]
    fn test_compact_shows_trigger_only() {
        let model = model(500, "/blog", false);
        let mut term = TestTerminal::with_size(50, 3);
        term.render_widget(NavBar::new(&model, "Site"), term.area());

        assert!(term.buffer_contains("Menu [m]"));
        assert!(!term.buffer_contains("Blog"));
        assert!(term.buffer_contains(HOME_GLYPH));
    }

    #[test]
    fn test_account_control_right_aligned() {
        let model = model(1200, "/", false);
        let mut term = TestTerminal::with_size(100, 3);
        term.render_widget(NavBar::new(&model, "Site"), term.area());

        let line = term.line(1);
        assert!(line.trim_end_matches('│').trim_end().ends_with("[a] Account"));
    }

    #[test]
    fn test_narrow_bar_keeps_home_control() {
        let model = model(200, "/", false);
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(NavBar::new(&model, "Server Setup Blog"), term.area());
        assert!(term.buffer_contains(HOME_GLYPH));
    }
}
