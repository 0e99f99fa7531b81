//! Server setup blog - terminal reader
//!
//! Binary entry point: parses arguments, loads settings and content, then
//! hands over to the TUI.

use std::path::PathBuf;

use clap::Parser;
use setup_blog_app::config;
use setup_blog_core::prelude::*;

/// Read the server setup guide in the terminal
#[derive(Parser, Debug)]
#[command(name = "setup-blog")]
#[command(about = "Read the server setup guide in your terminal", long_about = None)]
struct Args {
    /// Path to open first, e.g. `/blog`
    #[arg(long, value_name = "PATH")]
    route: Option<String>,

    /// Settings file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a commented default settings file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    color_eyre::install()?;

    let config_path = config::resolve_config_path(args.config.as_deref());

    if args.init_config {
        let Some(path) = config_path else {
            eprintln!("No config directory on this platform; pass --config <FILE>");
            std::process::exit(1);
        };
        if config::init_config_file(&path)? {
            eprintln!("Wrote default settings to {}", path.display());
        } else {
            eprintln!("Settings already exist at {}", path.display());
        }
        return Ok(());
    }

    // Logs go to a file, the terminal belongs to the reader
    let log_dir = setup_blog_core::logging::init()?;
    debug!("Logging to {}", log_dir.display());

    let settings = match &config_path {
        Some(path) => config::load_settings(path),
        None => config::SiteSettings::default(),
    };
    settings.validate().context("validating settings")?;

    let sections = setup_blog_core::content::sections().context("loading embedded sections")?;
    info!(
        "Loaded {} sections, {} nav links",
        sections.len(),
        settings.navbar.links.len()
    );

    let result = setup_blog_tui::run(settings, sections, args.route).await;

    match &result {
        Err(e) if e.is_fatal() => error!("Reader stopped: {:?}", e),
        Err(e) => warn!("Reader exited with error: {}", e),
        Ok(()) => {}
    }

    info!("Setup blog exiting");
    Ok(result?)
}
