//! Fallback view for unmatched paths.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use setup_blog_app::pages::NotFoundPage;

use crate::theme::styles;

pub struct NotFoundView<'a> {
    page: &'a NotFoundPage,
}

impl<'a> NotFoundView<'a> {
    pub fn new(page: &'a NotFoundPage) -> Self {
        Self { page }
    }
}

impl Widget for NotFoundView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let top = area.height / 3;
        let text_area = Rect {
            y: area.y + top,
            height: area.height - top,
            ..area
        };

        let lines = vec![
            Line::styled("404", styles::accent_bold()),
            Line::styled(self.page.title, styles::page_title()),
            Line::default(),
            Line::from(vec![
                Span::styled("Nothing lives at ", styles::text_secondary()),
                Span::styled(self.page.path.as_str(), styles::accent()),
            ]),
            Line::from(vec![
                Span::styled("h", styles::keybinding()),
                Span::styled(" home  ", styles::text_muted()),
                Span::styled(":", styles::keybinding()),
                Span::styled(" go to path", styles::text_muted()),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);
    }
}
