//! Landing page: heading plus a card whose button opens the blog.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use setup_blog_app::pages::LandingPage;
use setup_blog_core::SiteTheme;

use super::modal_overlay::centered_rect;
use crate::theme::{palette, styles};

const CARD_WIDTH: u16 = 36;
const CARD_HEIGHT: u16 = 7;

pub struct LandingView<'a> {
    page: &'a LandingPage,
}

impl<'a> LandingView<'a> {
    pub fn new(page: &'a LandingPage) -> Self {
        Self { page }
    }
}

impl Widget for LandingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 || area.width == 0 {
            return;
        }

        let heading_area = Rect {
            y: area.y + area.height / 4,
            height: 1,
            ..area
        };
        Paragraph::new(Line::styled(self.page.heading, styles::page_title()))
            .alignment(Alignment::Center)
            .render(heading_area, buf);

        let below = Rect {
            y: heading_area.y + 2,
            height: area.bottom().saturating_sub(heading_area.y + 2),
            ..area
        };
        let card_area = centered_rect(CARD_WIDTH, CARD_HEIGHT, below);
        let card = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette::CARD_ACCENT))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = card.inner(card_area);
        card.render(card_area, buf);

        let label = if SiteTheme::DARK.typography.button.uppercase {
            self.page.control.label.to_uppercase()
        } else {
            self.page.control.label.clone()
        };
        let lines = vec![
            Line::styled(self.page.card_title, styles::text_primary()),
            Line::default(),
            Line::from(Span::styled(format!("  {}  ", label), styles::button())),
            Line::from(vec![
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" to open", styles::text_muted()),
            ]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use setup_blog_app::pages;

    #[test]
    fn test_landing_shows_heading_card_and_button() {
        let page = pages::landing();
        let mut term = TestTerminal::new();
        term.render_widget(LandingView::new(&page), term.area());

        assert!(term.buffer_contains("Home Page"));
        assert!(term.buffer_contains("Go to blog page"));
        assert!(term.buffer_contains("BLOG"));
        assert!(term.buffer_contains("Enter to open"));
    }

    #[test]
    fn test_button_uses_button_style() {
        let page = pages::landing();
        let mut term = TestTerminal::new();
        term.render_widget(LandingView::new(&page), term.area());

        let y = (0..24).find(|&y| term.line_contains(y, "BLOG")).unwrap();
        let x = term.find_in_line(y, "BLOG").unwrap();
        assert_eq!(term.buffer()[(x, y)].bg, palette::BORDER_DIM);
    }

    #[test]
    fn test_short_area_does_not_panic() {
        let page = pages::landing();
        let mut term = TestTerminal::with_size(10, 1);
        term.render_widget(LandingView::new(&page), term.area());
    }
}
