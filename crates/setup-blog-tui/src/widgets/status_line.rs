//! Bottom row: key hints for the current page, the last auth outcome, or
//! the `:` route prompt while it is open.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use setup_blog_app::auth::AuthOutcome;
use setup_blog_app::routes::View;

use crate::theme::{palette, styles};

pub struct StatusLine<'a> {
    view: View,
    compact: bool,
    auth_status: Option<&'a AuthOutcome>,
}

impl<'a> StatusLine<'a> {
    pub fn new(view: View, compact: bool) -> Self {
        Self {
            view,
            compact,
            auth_status: None,
        }
    }

    pub fn auth_status(mut self, status: Option<&'a AuthOutcome>) -> Self {
        self.auth_status = status;
        self
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = match self.view {
            View::Landing => vec![("Enter", "blog")],
            View::Documentation => vec![("j/k", "scroll"), ("[/]", "section"), ("Enter", "jump")],
            View::NotFound => vec![],
        };
        hints.push(if self.compact { ("m", "menu") } else { ("1-9", "links") });
        hints.extend([("h", "home"), (":", "path"), ("q", "quit")]);
        hints
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::PAPER_BG));
        if area.height == 0 {
            return;
        }

        let spans: Vec<Span> = self
            .hints()
            .into_iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(format!(" {}", key), styles::keybinding()),
                    Span::styled(format!(" {} ", label), styles::text_muted()),
                ]
            })
            .collect();
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        if let Some(outcome) = self.auth_status {
            let status = Line::styled(
                format!(" {} ", outcome.message),
                styles::outcome(outcome.success),
            );
            let width = (status.width() as u16).min(area.width);
            buf.set_line(area.right() - width, area.y, &status, width);
        }
    }
}

/// `:` prompt for typing a path.
pub struct RoutePrompt<'a> {
    input: &'a str,
}

impl<'a> RoutePrompt<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }
}

impl Widget for RoutePrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::INPUT_BG));
        let line = Line::from(vec![
            Span::styled(":", styles::keybinding()),
            Span::styled(self.input, styles::text_primary()),
            Span::styled("█", styles::accent()),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
