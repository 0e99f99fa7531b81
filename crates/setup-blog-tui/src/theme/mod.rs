//! Terminal theme derived from the site's dark token table.
//!
//! - `palette`: `Color` constants taken from `SiteTheme::DARK`
//! - `styles`: Semantic style builder functions

pub mod palette;
pub mod styles;
