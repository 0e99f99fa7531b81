//! Account dialog opened from the navigation bar
//!
//! Shows the login (or register) form. Submitting hands the request to the
//! auth service configured for the reader; the outcome lands in the status
//! row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use setup_blog_app::account::{AccountField, AccountMenuState};

use super::modal_overlay;
use crate::theme::{palette, styles};

const DIALOG_WIDTH: u16 = 48;

pub struct AccountMenu<'a> {
    state: &'a AccountMenuState,
    show_registration: bool,
}

impl<'a> AccountMenu<'a> {
    pub fn new(state: &'a AccountMenuState) -> Self {
        Self {
            state,
            show_registration: false,
        }
    }

    pub fn show_registration(mut self, show: bool) -> Self {
        self.show_registration = show;
        self
    }

    fn field_lines(&self, field: AccountField, width: usize) -> [Line<'a>; 2] {
        let focused = self.state.focus == field;
        let label_style = if focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };

        let value = match field {
            AccountField::Password => self.state.masked_password(),
            _ => self.state.value(field).to_string(),
        };
        let cursor = if focused { "█" } else { "" };
        let text = format!(" {}{}", value, cursor);
        let padding = width.saturating_sub(text.chars().count());

        [
            Line::styled(field.label(), label_style),
            Line::from(Span::styled(
                format!("{}{}", text, " ".repeat(padding)),
                Style::default()
                    .fg(palette::TEXT_BRIGHT)
                    .bg(palette::INPUT_BG),
            )),
        ]
    }

    fn dialog_height(&self) -> u16 {
        // borders + fields + hint + blank + key hints
        let fields = self.state.form.fields().len() as u16;
        2 + fields * 3 + 4
    }
}

impl Widget for AccountMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let dialog = modal_overlay::centered_rect(DIALOG_WIDTH, self.dialog_height(), area);
        modal_overlay::clear_area(buf, dialog);
        modal_overlay::render_shadow(buf, dialog);

        let title = format!(" {} ", self.state.form.title());
        let block = styles::modal_block(&title);
        let inner = block.inner(dialog);
        block.render(dialog, buf);

        let content = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };
        let width = usize::from(content.width);

        let mut lines = Vec::new();
        for field in self.state.form.fields() {
            lines.extend(self.field_lines(*field, width));
            lines.push(Line::default());
        }

        if self.state.pending {
            lines.push(Line::styled("Working…", styles::accent()));
        } else if let Some(hint) = self.state.hint {
            lines.push(Line::styled(hint, styles::outcome(false)));
        } else {
            lines.push(Line::default());
        }
        lines.push(Line::default());

        let mut keys = vec![
            Span::styled("Tab", styles::keybinding()),
            Span::styled(" next  ", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" submit  ", styles::text_muted()),
        ];
        if self.show_registration {
            keys.push(Span::styled("F2", styles::keybinding()));
            keys.push(Span::styled(" switch  ", styles::text_muted()));
        }
        keys.extend([
            Span::styled("^O", styles::keybinding()),
            Span::styled(" log out  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" close", styles::text_muted()),
        ]);
        lines.push(Line::from(keys));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(content, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_login_form_fields() {
        let state = AccountMenuState::new();
        let mut term = TestTerminal::new();
        term.render_widget(AccountMenu::new(&state), term.area());

        assert!(term.buffer_contains("Log in"));
        assert!(term.buffer_contains("Username"));
        assert!(term.buffer_contains("Password"));
        assert!(!term.buffer_contains("Email"));
        assert!(!term.buffer_contains("F2"));
    }

    #[test]
    fn test_password_is_masked() {
        let mut state = AccountMenuState::new();
        state.focus_next();
        "hunter2".chars().for_each(|c| state.input_char(c));
        let mut term = TestTerminal::new();
        term.render_widget(AccountMenu::new(&state), term.area());

        assert!(!term.buffer_contains("hunter2"));
        assert!(term.buffer_contains("•••••••█"));
    }

    #[test]
    fn test_register_form_shows_email_and_switch_hint() {
        let mut state = AccountMenuState::new();
        assert!(state.switch_form(true));
        let mut term = TestTerminal::new();
        term.render_widget(AccountMenu::new(&state).show_registration(true), term.area());

        assert!(term.buffer_contains("Register"));
        assert!(term.buffer_contains("Email"));
        assert!(term.buffer_contains("F2 switch"));
    }

    #[test]
    fn test_blank_submit_hint_rendered() {
        let mut state = AccountMenuState::new();
        assert!(state.request().is_none());
        let mut term = TestTerminal::new();
        term.render_widget(AccountMenu::new(&state), term.area());

        assert!(term.buffer_contains("Fill in every field"));
    }
}
