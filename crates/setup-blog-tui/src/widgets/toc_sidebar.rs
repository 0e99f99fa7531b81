//! Table of contents column

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use setup_blog_app::toc::{Sidebar, TOC_TITLE};

use crate::theme::{palette, styles};

pub struct TocSidebar<'a> {
    sidebar: &'a Sidebar,
    /// Highlighted entry
    selected: usize,
    /// Section at the top of the reading column
    current: Option<usize>,
}

impl<'a> TocSidebar<'a> {
    pub fn new(sidebar: &'a Sidebar) -> Self {
        Self {
            sidebar,
            selected: 0,
            current: None,
        }
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected = index;
        self
    }

    pub fn current(mut self, index: Option<usize>) -> Self {
        self.current = index;
        self
    }
}

impl Widget for TocSidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = styles::glass_block(false)
            .title(Span::styled(format!(" {} ", TOC_TITLE), styles::accent_bold()))
            .style(Style::default().bg(palette::CARD_BG));

        // the highlighted entry's anchor, e.g. `#stage-a3`
        if let Some(entry) = self.sidebar.entries().get(self.selected) {
            block = block.title_bottom(Span::styled(
                format!(" {} ", entry.href),
                styles::text_muted(),
            ));
        }

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        match self.sidebar {
            Sidebar::Placeholder(text) => {
                Paragraph::new(Line::styled(
                    *text,
                    styles::text_muted().add_modifier(Modifier::ITALIC),
                ))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            }
            Sidebar::Entries(entries) => {
                let height = usize::from(inner.height);
                let first = self.selected.saturating_sub(height.saturating_sub(1));

                let lines: Vec<Line> = entries
                    .iter()
                    .enumerate()
                    .skip(first)
                    .take(height)
                    .map(|(i, entry)| {
                        let marker = if self.current == Some(i) { "▸ " } else { "  " };
                        let style = if i == self.selected {
                            styles::focused_selected()
                        } else {
                            styles::text_primary()
                        };
                        Line::from(vec![
                            Span::styled(marker, styles::accent()),
                            Span::styled(entry.title.as_str(), style),
                        ])
                    })
                    .collect();

                Paragraph::new(lines).render(inner, buf);
            }
        }
    }
}
