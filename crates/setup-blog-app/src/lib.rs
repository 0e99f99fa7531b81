//! setup-blog-app - Site model and application state for the setup blog
//!
//! This crate holds everything both front ends share: the routing table, the
//! responsive navigation bar model, the table-of-contents model, page
//! composition, configuration loading and the authentication boundary. It
//! also implements the TEA (The Elm Architecture) state/message/update cycle
//! driven by the terminal reader.
//!
//! Nothing here depends on a terminal library or an async runtime, so the
//! crate builds for the browser target too.

pub mod account;
pub mod auth;
pub mod config;
pub mod doc_view_state;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod nav;
pub mod pages;
pub mod routes;
pub mod state;
pub mod toc;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use routes::View;
pub use state::AppState;
