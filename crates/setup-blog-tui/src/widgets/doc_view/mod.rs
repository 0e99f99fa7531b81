//! Documentation reading column
//!
//! Lays the page out for the current width, reports the layout back to
//! [`DocViewState`] (total rows, visible rows, heading rows) and draws the
//! visible slice with a scrollbar.

mod layout;

use layout::DocLayout;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget},
};
use setup_blog_app::doc_view_state::DocViewState;
use setup_blog_app::pages::DocumentationPage;

use crate::theme::{palette, styles};

pub struct DocView<'a> {
    page: &'a DocumentationPage<'a>,
}

impl<'a> DocView<'a> {
    pub fn new(page: &'a DocumentationPage<'a>) -> Self {
        Self { page }
    }
}

impl StatefulWidget for DocView<'_> {
    type State = DocViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut DocViewState) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::PAPER_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 3 || inner.height == 0 {
            return;
        }

        // one column of padding on each side, the right one shared with the scrollbar
        let text_area = Rect {
            x: inner.x + 1,
            width: inner.width - 2,
            ..inner
        };

        let DocLayout { lines, anchor_rows } = DocLayout::build(self.page, text_area.width);
        let total_lines = lines.len();
        let visible_lines = usize::from(text_area.height);
        state.set_layout(total_lines, visible_lines, anchor_rows);

        let visible: Vec<_> = lines
            .into_iter()
            .skip(state.offset)
            .take(visible_lines)
            .collect();
        Paragraph::new(visible).render(text_area, buf);

        if total_lines > visible_lines {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(styles::border_inactive());

            let mut scrollbar_state =
                ScrollbarState::new(state.max_offset()).position(state.offset);
            scrollbar.render(area, buf, &mut scrollbar_state);
        }
    }
}
