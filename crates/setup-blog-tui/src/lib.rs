//! setup-blog-tui - Terminal reader for the server setup blog
//!
//! Renders the same pages as the website with ratatui: navigation bar,
//! landing page, documentation with a table of contents, and the
//! not-found view. State and routing live in `setup-blog-app`; this crate
//! adds terminal I/O, rendering and the async side effects.

pub mod actions;
pub mod event;
pub mod layout;
pub mod process;
pub mod render;
pub mod runner;
pub mod signals;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::{run, run_with_auth};
