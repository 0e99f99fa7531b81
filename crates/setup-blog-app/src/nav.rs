//! Responsive navigation bar model
//!
//! The bar has two modes chosen by viewport width: expanded (inline links)
//! and compact (one trigger that opens an overlay list). Both renderers build
//! a [`NavBarModel`] from the same inputs and draw it.

use setup_blog_core::NavLink;
use tracing::debug;

use crate::routes::HOME_PATH;

// ─────────────────────────────────────────────────────────────────────────────
// Viewport
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Compact,
    Expanded,
}

/// Viewport width and the derived layout mode.
///
/// `is_compact` only changes when an observed width crosses the breakpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportState {
    width_px: u32,
    breakpoint_px: u32,
    is_compact: bool,
}

impl ViewportState {
    pub fn new(width_px: u32, breakpoint_px: u32) -> Self {
        Self {
            width_px,
            breakpoint_px,
            is_compact: width_px < breakpoint_px,
        }
    }

    /// Record a new width. Returns the new mode when the breakpoint was crossed.
    pub fn observe(&mut self, width_px: u32) -> Option<LayoutMode> {
        self.width_px = width_px;
        let compact = width_px < self.breakpoint_px;
        if compact == self.is_compact {
            return None;
        }
        self.is_compact = compact;
        let mode = self.mode();
        debug!("Viewport {}px crossed {}px -> {:?}", width_px, self.breakpoint_px, mode);
        Some(mode)
    }

    pub fn is_compact(&self) -> bool {
        self.is_compact
    }

    pub fn mode(&self) -> LayoutMode {
        if self.is_compact {
            LayoutMode::Compact
        } else {
            LayoutMode::Expanded
        }
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn breakpoint_px(&self) -> u32 {
        self.breakpoint_px
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Overlay menu
// ─────────────────────────────────────────────────────────────────────────────

/// Compact-mode overlay. Created closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavMenuState {
    is_open: bool,
    highlighted: usize,
}

impl NavMenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open with the highlight on `start` (usually the selected link).
    pub fn open(&mut self, start: usize) {
        self.is_open = true;
        self.highlighted = start;
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.highlighted = 0;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Move down, wrapping at `len`.
    pub fn highlight_next(&mut self, len: usize) {
        if len > 0 {
            self.highlighted = (self.highlighted + 1) % len;
        }
    }

    /// Move up, wrapping at `len`.
    pub fn highlight_prev(&mut self, len: usize) {
        if len > 0 {
            self.highlighted = (self.highlighted + len - 1) % len;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Bar model
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Selected,
    Default,
}

/// A link as it should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub path: String,
    pub state: LinkState,
}

impl NavItem {
    pub fn is_selected(&self) -> bool {
        self.state == LinkState::Selected
    }
}

/// Index of the link whose path equals `current_path` exactly.
pub fn selected_index(links: &[NavLink], current_path: &str) -> Option<usize> {
    links.iter().position(|link| link.path == current_path)
}

/// Links in list order with their selection state.
pub fn nav_items(links: &[NavLink], current_path: &str) -> Vec<NavItem> {
    links
        .iter()
        .map(|link| NavItem {
            label: link.label.clone(),
            path: link.path.clone(),
            state: if link.path == current_path {
                LinkState::Selected
            } else {
                LinkState::Default
            },
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavLayout {
    /// All links inline, no trigger.
    Expanded { links: Vec<NavItem> },
    /// A single trigger; the overlay list is present only while open.
    Compact { overlay: Option<Vec<NavItem>> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarModel {
    /// Target of the always-visible home control.
    pub home_path: &'static str,
    pub layout: NavLayout,
}

impl NavBarModel {
    pub fn build(
        links: &[NavLink],
        current_path: &str,
        viewport: &ViewportState,
        menu: &NavMenuState,
    ) -> Self {
        let layout = if viewport.is_compact() {
            NavLayout::Compact {
                overlay: menu
                    .is_open()
                    .then(|| nav_items(links, current_path)),
            }
        } else {
            NavLayout::Expanded {
                links: nav_items(links, current_path),
            }
        };

        Self {
            home_path: HOME_PATH,
            layout,
        }
    }

    /// Links drawn inline in the bar. Empty in compact mode.
    pub fn inline_links(&self) -> &[NavItem] {
        match &self.layout {
            NavLayout::Expanded { links } => links,
            NavLayout::Compact { .. } => &[],
        }
    }

    /// Number of trigger controls: one in compact mode, none otherwise.
    pub fn trigger_count(&self) -> usize {
        match self.layout {
            NavLayout::Compact { .. } => 1,
            NavLayout::Expanded { .. } => 0,
        }
    }

    pub fn overlay_items(&self) -> Option<&[NavItem]> {
        match &self.layout {
            NavLayout::Compact { overlay } => overlay.as_deref(),
            NavLayout::Expanded { .. } => None,
        }
    }

    /// Selected links across inline row and overlay.
    pub fn selected_count(&self) -> usize {
        let inline = self.inline_links().iter().filter(|i| i.is_selected()).count();
        let overlay = self
            .overlay_items()
            .map(|items| items.iter().filter(|i| i.is_selected()).count())
            .unwrap_or(0);
        inline + overlay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> Vec<NavLink> {
        vec![
            NavLink::new("Home", "/"),
            NavLink::new("Blog", "/blog"),
        ]
    }

    #[test]
    fn test_viewport_initial_mode() {
        assert!(ViewportState::new(500, 960).is_compact());
        assert!(!ViewportState::new(960, 960).is_compact());
        assert!(!ViewportState::new(1200, 960).is_compact());
    }

    #[test]
    fn test_observe_only_reports_crossings() {
        let mut viewport = ViewportState::new(1200, 960);
        assert_eq!(viewport.observe(1000), None);
        assert_eq!(viewport.width_px(), 1000);
        assert_eq!(viewport.observe(959), Some(LayoutMode::Compact));
        assert_eq!(viewport.observe(500), None);
        assert_eq!(viewport.observe(960), Some(LayoutMode::Expanded));
    }

    #[test]
    fn test_expanded_shows_all_links_and_no_trigger() {
        let model = NavBarModel::build(
            &links(),
            "/blog",
            &ViewportState::new(1200, 960),
            &NavMenuState::new(),
        );
        assert_eq!(model.trigger_count(), 0);
        let labels: Vec<_> = model.inline_links().iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Blog"]);
        assert_eq!(model.home_path, "/");
    }

    #[test]
    fn test_compact_shows_one_trigger_and_no_inline_links() {
        let model = NavBarModel::build(
            &links(),
            "/blog",
            &ViewportState::new(500, 960),
            &NavMenuState::new(),
        );
        assert_eq!(model.trigger_count(), 1);
        assert!(model.inline_links().is_empty());
        assert!(model.overlay_items().is_none());
    }

    #[test]
    fn test_open_overlay_lists_links_in_order() {
        let mut menu = NavMenuState::new();
        menu.open(0);
        let model = NavBarModel::build(&links(), "/", &ViewportState::new(500, 960), &menu);
        let items = model.overlay_items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].path, "/");
        assert_eq!(items[1].path, "/blog");
    }

    #[test]
    fn test_exact_match_selection() {
        let items = nav_items(&links(), "/blog");
        assert_eq!(items.iter().filter(|i| i.is_selected()).count(), 1);
        assert!(items[1].is_selected());

        let items = nav_items(&links(), "/blog/extra");
        assert_eq!(items.iter().filter(|i| i.is_selected()).count(), 0);
    }

    #[test]
    fn test_unknown_route_selects_nothing() {
        let model = NavBarModel::build(
            &links(),
            "/totally-unknown-path",
            &ViewportState::new(1200, 960),
            &NavMenuState::new(),
        );
        assert_eq!(model.selected_count(), 0);
        assert_eq!(selected_index(&links(), "/totally-unknown-path"), None);
    }

    #[test]
    fn test_empty_link_list() {
        let mut menu = NavMenuState::new();
        menu.open(0);
        let compact = NavBarModel::build(&[], "/", &ViewportState::new(500, 960), &menu);
        assert_eq!(compact.overlay_items().map(<[NavItem]>::len), Some(0));

        let expanded = NavBarModel::build(&[], "/", &ViewportState::new(1200, 960), &menu);
        assert!(expanded.inline_links().is_empty());
    }

    #[test]
    fn test_menu_highlight_wraps() {
        let mut menu = NavMenuState::new();
        menu.open(0);
        menu.highlight_prev(3);
        assert_eq!(menu.highlighted(), 2);
        menu.highlight_next(3);
        assert_eq!(menu.highlighted(), 0);
        menu.highlight_next(0);
        assert_eq!(menu.highlighted(), 0);
    }

    #[test]
    fn test_menu_close_resets() {
        let mut menu = NavMenuState::new();
        menu.open(1);
        menu.close();
        assert!(!menu.is_open());
        assert_eq!(menu.highlighted(), 0);
    }
}
