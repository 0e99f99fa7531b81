//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use setup_blog_core::Tone;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn body() -> Style {
    Style::default().fg(palette::TEXT_BODY)
}

pub fn page_title() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

pub fn section_heading() -> Style {
    Style::default()
        .fg(palette::HEADING)
        .add_modifier(Modifier::BOLD)
}

pub fn subheading() -> Style {
    Style::default().fg(palette::SUBHEADING)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

/// Key hint such as `[m]`
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Command text inside step cards and code blocks
pub fn code() -> Style {
    Style::default().fg(palette::STATUS_GREEN).bg(palette::PAPER_BG)
}

/// Selected navigation link
pub fn link_selected() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn link_default() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

/// "Black on Cyan" - focused+selected items in lists
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Uppercase gradient-ish button label
pub fn button() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .bg(palette::BORDER_DIM)
        .add_modifier(Modifier::BOLD)
}

pub fn tone(tone: Tone) -> Style {
    match tone {
        Tone::Neutral => text_primary(),
        Tone::Success => Style::default().fg(palette::STATUS_GREEN),
        Tone::Warning => Style::default().fg(palette::STATUS_YELLOW),
    }
}

pub fn outcome(success: bool) -> Style {
    if success {
        Style::default().fg(palette::STATUS_GREEN)
    } else {
        Style::default().fg(palette::STATUS_RED)
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::PAPER_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_link_differs_from_default() {
        assert_ne!(link_selected(), link_default());
        assert!(link_selected().add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_tone_styles() {
        assert_eq!(tone(Tone::Success).fg, Some(palette::STATUS_GREEN));
        assert_eq!(tone(Tone::Warning).fg, Some(palette::STATUS_YELLOW));
    }

    #[test]
    fn test_outcome_styles() {
        assert_eq!(outcome(true).fg, Some(palette::STATUS_GREEN));
        assert_eq!(outcome(false).fg, Some(palette::STATUS_RED));
    }
}
