//! File logging for the terminal reader
//!
//! The reader owns stdout, so every crate in the workspace logs through
//! `tracing` into a daily rolling file instead.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "SETUP_BLOG_LOG";

/// Rolled daily into `setup-blog.log.YYYY-MM-DD`.
const LOG_FILE_PREFIX: &str = "setup-blog.log";

/// Our crates at info, everything else at warn.
const DEFAULT_FILTER: &str = "setup_blog=info,setup_blog_app=info,setup_blog_tui=info,warn";

/// Install the file subscriber and return the directory it writes to.
///
/// ```bash
/// SETUP_BLOG_LOG=debug setup-blog
/// SETUP_BLOG_LOG=setup_blog_app=trace setup-blog --route /blog
/// ```
pub fn init() -> Result<PathBuf> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("── setup-blog {} ──", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(log_dir)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `<data_local_dir>/setup-blog/logs`, or `./setup-blog/logs` without one.
pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("setup-blog")
        .join("logs")
}
