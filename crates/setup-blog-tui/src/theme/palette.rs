//! Color palette, converted from the shared site theme tokens.

use ratatui::style::Color;
use setup_blog_core::{Rgb, SiteTheme};

const fn rgb(c: Rgb) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}

const THEME: SiteTheme = SiteTheme::DARK;

// --- Background layers ---
pub const DEEPEST_BG: Color = rgb(THEME.palette.background_default);
pub const PAPER_BG: Color = rgb(THEME.palette.background_paper);
pub const CARD_BG: Color = rgb(THEME.card.background);
pub const APP_BAR_BG: Color = rgb(THEME.app_bar.background);
pub const INPUT_BG: Color = rgb(THEME.input.background);

// --- Borders ---
pub const BORDER_DIM: Color = rgb(THEME.app_bar.border);
pub const BORDER_ACTIVE: Color = rgb(THEME.input.focus);
pub const CARD_ACCENT: Color = rgb(THEME.card.accent_border);

// --- Accent ---
pub const PRIMARY: Color = rgb(THEME.palette.primary.main);
pub const ACCENT: Color = rgb(THEME.palette.secondary.main);
pub const HOVER: Color = rgb(THEME.input.hover);
pub const CONTRAST_FG: Color = rgb(THEME.palette.secondary.contrast);

// --- Text ---
pub const TEXT_PRIMARY: Color = rgb(THEME.palette.text_primary);
pub const TEXT_SECONDARY: Color = rgb(THEME.palette.text_secondary);
pub const TEXT_BODY: Color = rgb(THEME.typography.body.color);
pub const TEXT_BRIGHT: Color = rgb(THEME.typography.h1.color);
pub const HEADING: Color = rgb(THEME.typography.h2.color);
pub const SUBHEADING: Color = rgb(THEME.typography.h3.color);

// --- Status ---
pub const STATUS_GREEN: Color = rgb(THEME.palette.success);
pub const STATUS_RED: Color = rgb(THEME.palette.error);
pub const STATUS_YELLOW: Color = rgb(THEME.palette.warning);
pub const STATUS_BLUE: Color = rgb(THEME.palette.info);

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(5, 6, 8);
pub const TEXT_MUTED: Color = Color::Rgb(110, 110, 110);
