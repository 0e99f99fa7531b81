//! Compact-mode navigation drawer, pinned to the right edge.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use setup_blog_app::nav::NavItem;

use super::modal_overlay;
use crate::layout;
use crate::theme::styles;

pub struct NavDrawer<'a> {
    items: &'a [NavItem],
    highlighted: usize,
}

impl<'a> NavDrawer<'a> {
    pub fn new(items: &'a [NavItem], highlighted: usize) -> Self {
        Self { items, highlighted }
    }
}

impl Widget for NavDrawer<'_> {
    /// `area` is the whole screen; it is dimmed and the drawer drawn over
    /// its right edge.
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let drawer = layout::drawer(area);
        modal_overlay::clear_area(buf, drawer);

        let block = styles::modal_block(" Menu ");
        let inner = block.inner(drawer);
        block.render(drawer, buf);

        let mut lines: Vec<Line> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let marker = if item.is_selected() { "● " } else { "  " };
                let style = if i == self.highlighted {
                    styles::focused_selected()
                } else if item.is_selected() {
                    styles::link_selected()
                } else {
                    styles::link_default()
                };
                Line::from(vec![
                    Span::styled(marker, styles::accent()),
                    Span::styled(item.label.as_str(), style),
                ])
            })
            .collect();

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" open  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" close", styles::text_muted()),
        ]));

        Paragraph::new(lines).render(inner, buf);
    }
}
