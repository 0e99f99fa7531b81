//! # setup-blog-core - Core Domain Types
//!
//! Foundation crate for the setup blog. Provides domain types, the embedded
//! section content, theme tokens and error handling.
//!
//! This crate has **zero internal dependencies** and compiles for both the
//! terminal reader and the browser build (disable the default `file-log`
//! feature for the latter).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`NavLink`] - Label + path of a navigation entry
//! - [`Section`] - One titled documentation chapter with its [`Block`]s
//! - [`Step`] - What/why/command/expect card inside a section
//!
//! ### Content (`content`)
//! - [`content::sections()`] - Embedded, validated server-setup sections
//!
//! ### Theme (`theme`)
//! - [`SiteTheme`] - Colour, typography and component tokens
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `is_fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use setup_blog_core::prelude::*;
//! ```

pub mod content;
pub mod error;
#[cfg(feature = "file-log")]
pub mod logging;
pub mod prelude;
pub mod theme;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use theme::{Rgb, SiteTheme};
pub use types::{Block, ListItem, NavLink, Section, Step, Tone};
