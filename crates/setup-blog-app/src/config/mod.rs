//! Site configuration
//!
//! Supports a single `config.toml`, looked up from the `--config` flag or the
//! platform config directory (`<config_dir>/setup-blog/config.toml`).

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, resolve_config_path};
pub use types::*;
