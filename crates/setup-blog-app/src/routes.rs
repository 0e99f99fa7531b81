//! Routing table
//!
//! An ordered list of exact-match entries with a not-found default. There are
//! no parameters, guards or redirects.

/// Landing page path.
pub const HOME_PATH: &str = "/";

/// Documentation page path.
pub const BLOG_PATH: &str = "/blog";

/// Page a route resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Documentation,
    NotFound,
}

/// One row of the routing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub view: View,
}

/// Routing table in match order.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: HOME_PATH,
        view: View::Landing,
    },
    RouteEntry {
        path: BLOG_PATH,
        view: View::Documentation,
    },
];

/// Resolve a path to its view. Exact string comparison only.
pub fn resolve(path: &str) -> View {
    ROUTES
        .iter()
        .find(|entry| entry.path == path)
        .map(|entry| entry.view)
        .unwrap_or(View::NotFound)
}

/// Whether `path` has its own entry in the routing table.
pub fn is_known(path: &str) -> bool {
    resolve(path) != View::NotFound
}
