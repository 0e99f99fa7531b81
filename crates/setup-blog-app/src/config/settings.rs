//! Settings loader for `config.toml`

use std::path::{Path, PathBuf};

use setup_blog_core::prelude::*;

use super::types::SiteSettings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "setup-blog";

const DEFAULT_CONFIG: &str = r#"# Server Setup Blog Configuration

[site]
name = "Company name"
show_registration = false   # Show the register form in the account menu

[navbar]
height_compact_px = 50
height_expanded_px = 64
breakpoint_px = 960         # Narrower viewports use the compact menu

[[navbar.links]]
label = "Blog"
path = "/blog"              # Must be a known route

[social]
twitter_tag = ""            # Empty = hidden
telegram_tag = ""

[docs]
scroll_margin_top_px = 96   # Space kept above a heading after an anchor jump

[tui]
# One terminal cell stands for this many pixels (96 columns = 960px)
cell_width_px = 10
cell_height_px = 20
tick_rate_ms = 250
"#;

/// `<config_dir>/setup-blog/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// An explicit path wins over the platform default.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(default_config_path)
}

/// Load settings from `config_path`.
///
/// A missing file, an unreadable file and invalid TOML all fall back to the
/// built-in defaults.
pub fn load_settings(config_path: &Path) -> SiteSettings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return SiteSettings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                SiteSettings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            SiteSettings::default()
        }
    }
}

/// Write the commented default config to `config_path`.
///
/// Never overwrites. Returns `false` when the file already existed.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        debug!("Config already exists at {:?}", config_path);
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
        }
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;

    info!("Wrote default config to {:?}", config_path);
    Ok(true)
}
