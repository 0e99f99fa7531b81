//! Configuration types for the setup blog
//!
//! Defines:
//! - `SiteSettings` - Complete configuration file
//! - Per-table sub-types with their defaults

use serde::{Deserialize, Serialize};
use setup_blog_core::prelude::*;
use setup_blog_core::NavLink;
use url::Url;

use crate::routes;

/// Outbound social URL templates. `{}` is replaced by the configured tag.
pub const TWITTER_URL_TEMPLATE: &str = "https://x.com/{}";
pub const TELEGRAM_URL_TEMPLATE: &str = "https://t.me/{}";

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub site: SiteInfo,

    #[serde(default)]
    pub navbar: NavbarSettings,

    #[serde(default)]
    pub social: SocialSettings,

    #[serde(default)]
    pub docs: DocsSettings,

    #[serde(default)]
    pub tui: TuiSettings,
}

impl SiteSettings {
    /// Reject values the renderers cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.navbar.breakpoint_px == 0 {
            return Err(Error::config_invalid("navbar.breakpoint_px must be > 0"));
        }
        if self.tui.cell_width_px == 0 || self.tui.cell_height_px == 0 {
            return Err(Error::config_invalid(
                "tui.cell_width_px and tui.cell_height_px must be > 0",
            ));
        }
        for link in &self.navbar.links {
            if !routes::is_known(&link.path) {
                return Err(Error::config_invalid(format!(
                    "navbar link '{}' points at unknown route '{}'",
                    link.label, link.path
                )));
            }
        }
        for link in self.social.links() {
            Url::parse(&link.path).map_err(|e| {
                Error::config_invalid(format!("social link '{}' is not a URL: {}", link.label, e))
            })?;
        }
        Ok(())
    }
}

/// `[site]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SiteInfo {
    /// Brand text shown next to the home control
    #[serde(default = "default_site_name")]
    pub name: String,

    /// Show the register form in the account menu
    #[serde(default)]
    pub show_registration: bool,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            show_registration: false,
        }
    }
}

fn default_site_name() -> String {
    "Company name".to_string()
}

/// `[navbar]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavbarSettings {
    #[serde(default = "default_height_compact")]
    pub height_compact_px: u32,

    #[serde(default = "default_height_expanded")]
    pub height_expanded_px: u32,

    /// Widths below this are compact
    #[serde(default = "default_breakpoint")]
    pub breakpoint_px: u32,

    #[serde(default = "default_nav_links")]
    pub links: Vec<NavLink>,
}

impl Default for NavbarSettings {
    fn default() -> Self {
        Self {
            height_compact_px: default_height_compact(),
            height_expanded_px: default_height_expanded(),
            breakpoint_px: default_breakpoint(),
            links: default_nav_links(),
        }
    }
}

impl NavbarSettings {
    pub fn height_px(&self, compact: bool) -> u32 {
        if compact {
            self.height_compact_px
        } else {
            self.height_expanded_px
        }
    }
}

fn default_height_compact() -> u32 {
    50
}

fn default_height_expanded() -> u32 {
    64
}

fn default_breakpoint() -> u32 {
    960
}

fn default_nav_links() -> Vec<NavLink> {
    vec![NavLink::new("Blog", routes::BLOG_PATH)]
}

/// `[social]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SocialSettings {
    /// X/Twitter handle, empty = hidden
    #[serde(default)]
    pub twitter_tag: String,

    /// Telegram handle, empty = hidden
    #[serde(default)]
    pub telegram_tag: String,
}

impl SocialSettings {
    /// Outbound links for every tag that is set.
    pub fn links(&self) -> Vec<NavLink> {
        let mut links = Vec::new();
        if !self.twitter_tag.trim().is_empty() {
            links.push(NavLink::new(
                "X",
                TWITTER_URL_TEMPLATE.replace("{}", self.twitter_tag.trim()),
            ));
        }
        if !self.telegram_tag.trim().is_empty() {
            links.push(NavLink::new(
                "Telegram",
                TELEGRAM_URL_TEMPLATE.replace("{}", self.telegram_tag.trim()),
            ));
        }
        links
    }
}

/// `[docs]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DocsSettings {
    /// Space kept above a section heading after an anchor jump
    #[serde(default = "default_scroll_margin")]
    pub scroll_margin_top_px: u32,
}

impl Default for DocsSettings {
    fn default() -> Self {
        Self {
            scroll_margin_top_px: default_scroll_margin(),
        }
    }
}

fn default_scroll_margin() -> u32 {
    96
}

/// `[tui]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TuiSettings {
    /// Pixels represented by one terminal column
    #[serde(default = "default_cell_width")]
    pub cell_width_px: u32,

    /// Pixels represented by one terminal row
    #[serde(default = "default_cell_height")]
    pub cell_height_px: u32,

    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            cell_width_px: default_cell_width(),
            cell_height_px: default_cell_height(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

/// Header never drops below this many rows (border + text + border).
pub const MIN_HEADER_ROWS: u16 = 3;

impl TuiSettings {
    /// Terminal width in columns to viewport width in pixels, saturating.
    pub fn columns_to_px(&self, columns: u16) -> u32 {
        u32::from(columns).saturating_mul(self.cell_width_px)
    }

    /// Pixels to rows, rounded up.
    pub fn px_to_rows(&self, px: u32) -> u16 {
        let rows = px.div_ceil(self.cell_height_px.max(1));
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    /// Rows occupied by the fixed navigation header.
    pub fn header_rows(&self, navbar: &NavbarSettings, compact: bool) -> u16 {
        self.px_to_rows(navbar.height_px(compact)).max(MIN_HEADER_ROWS)
    }

    /// Rows to keep above a heading after an anchor jump, net of the header.
    pub fn anchor_margin_rows(&self, settings: &SiteSettings, compact: bool) -> u16 {
        self.px_to_rows(settings.docs.scroll_margin_top_px)
            .saturating_sub(self.header_rows(&settings.navbar, compact))
    }
}

fn default_cell_width() -> u32 {
    10
}

fn default_cell_height() -> u32 {
    20
}

fn default_tick_rate() -> u64 {
    250
}
