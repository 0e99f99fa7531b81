//! Site theme tokens
//!
//! A single dark theme expressed as plain values. Front ends receive a
//! `SiteTheme` by argument and map it to their own style types (ratatui
//! `Color`s in the terminal, CSS custom properties in the browser).

use std::fmt;

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Build from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Foreground/background pair for a colour role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRole {
    pub main: Rgb,
    pub contrast: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: ColorRole,
    pub secondary: ColorRole,
    pub background_default: Rgb,
    pub background_paper: Rgb,
    pub text_primary: Rgb,
    pub text_secondary: Rgb,
    pub warning: Rgb,
    pub error: Rgb,
    pub success: Rgb,
    pub info: Rgb,
}

/// One typography role (`h1`, `body1`, ...).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size_rem: f32,
    pub weight: u16,
    pub color: Rgb,
    pub uppercase: bool,
}

impl TextStyle {
    const fn new(size_rem: f32, weight: u16, color: Rgb) -> Self {
        Self {
            size_rem,
            weight,
            color,
            uppercase: false,
        }
    }

    pub fn is_bold(&self) -> bool {
        self.weight >= 600
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    pub font_family: &'static str,
    pub h1: TextStyle,
    pub h2: TextStyle,
    pub h3: TextStyle,
    pub body: TextStyle,
    pub button: TextStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonTokens {
    pub radius_px: u16,
    pub padding: &'static str,
    pub gradient_from: Rgb,
    pub gradient_to: Rgb,
    pub outline: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardTokens {
    pub background: Rgb,
    pub foreground: Rgb,
    pub radius_px: u16,
    pub accent_border: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppBarTokens {
    pub background: Rgb,
    pub foreground: Rgb,
    pub border: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputTokens {
    pub background: Rgb,
    pub border: Rgb,
    pub hover: Rgb,
    pub focus: Rgb,
}

/// Complete token table handed to every renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteTheme {
    pub palette: Palette,
    pub typography: Typography,
    pub button: ButtonTokens,
    pub card: CardTokens,
    pub app_bar: AppBarTokens,
    pub input: InputTokens,
}

const VIOLET: Rgb = Rgb::hex(0x8A2BE2);
const CYAN: Rgb = Rgb::hex(0x00CFFD);

impl SiteTheme {
    pub const DARK: SiteTheme = SiteTheme {
        palette: Palette {
            primary: ColorRole {
                main: Rgb::hex(0x3F51B5),
                contrast: Rgb::hex(0xFFFFFF),
            },
            secondary: ColorRole {
                main: CYAN,
                contrast: Rgb::hex(0x000000),
            },
            background_default: Rgb::hex(0x121212),
            background_paper: Rgb::hex(0x1E1E1E),
            text_primary: Rgb::hex(0xE0E0E0),
            text_secondary: Rgb::hex(0xAAAAAA),
            warning: Rgb::hex(0xFF9800),
            error: Rgb::hex(0xEF5350),
            success: Rgb::hex(0x00E676),
            info: Rgb::hex(0x40C4FF),
        },
        typography: Typography {
            font_family: "'Inter', 'Roboto', 'Arial', sans-serif",
            h1: TextStyle::new(3.0, 700, Rgb::hex(0xFFFFFF)),
            h2: TextStyle::new(2.5, 600, Rgb::hex(0xD1C4E9)),
            h3: TextStyle::new(2.0, 500, Rgb::hex(0xB39DDB)),
            body: TextStyle::new(1.0, 400, Rgb::hex(0xCCCCCC)),
            button: TextStyle {
                size_rem: 1.0,
                weight: 600,
                color: Rgb::hex(0xFFFFFF),
                uppercase: true,
            },
        },
        button: ButtonTokens {
            radius_px: 10,
            padding: "10px 22px",
            gradient_from: VIOLET,
            gradient_to: CYAN,
            outline: VIOLET,
        },
        card: CardTokens {
            background: Rgb::hex(0x1F1B24),
            foreground: Rgb::hex(0xFFFFFF),
            radius_px: 14,
            accent_border: CYAN,
        },
        app_bar: AppBarTokens {
            background: Rgb::hex(0x1E1E1E),
            foreground: Rgb::hex(0xFFFFFF),
            border: VIOLET,
        },
        input: InputTokens {
            background: Rgb::hex(0x292929),
            border: VIOLET,
            hover: Rgb::hex(0xBA68C8),
            focus: CYAN,
        },
    };

    /// CSS custom properties for the browser build, one `--token: value;` per line.
    pub fn to_css(&self) -> String {
        let p = &self.palette;
        let t = &self.typography;
        let vars: [(&str, String); 20] = [
            ("--color-primary", p.primary.main.to_string()),
            ("--color-primary-contrast", p.primary.contrast.to_string()),
            ("--color-secondary", p.secondary.main.to_string()),
            ("--color-secondary-contrast", p.secondary.contrast.to_string()),
            ("--color-bg", p.background_default.to_string()),
            ("--color-paper", p.background_paper.to_string()),
            ("--color-text", p.text_primary.to_string()),
            ("--color-text-muted", p.text_secondary.to_string()),
            ("--color-warning", p.warning.to_string()),
            ("--color-error", p.error.to_string()),
            ("--color-success", p.success.to_string()),
            ("--color-info", p.info.to_string()),
            ("--font-family", t.font_family.to_string()),
            ("--button-radius", format!("{}px", self.button.radius_px)),
            ("--button-padding", self.button.padding.to_string()),
            (
                "--button-gradient",
                format!(
                    "linear-gradient(90deg, {}, {})",
                    self.button.gradient_from, self.button.gradient_to
                ),
            ),
            ("--card-bg", self.card.background.to_string()),
            (
                "--card-border-left",
                format!("5px solid {}", self.card.accent_border),
            ),
            ("--appbar-bg", self.app_bar.background.to_string()),
            (
                "--appbar-border",
                format!("1px solid {}", self.app_bar.border),
            ),
        ];

        let mut css = String::from(":root {\n");
        for (name, value) in vars {
            css.push_str(&format!("  {}: {};\n", name, value));
        }
        css.push('}');
        css
    }
}

impl Default for SiteTheme {
    fn default() -> Self {
        Self::DARK
    }
}
