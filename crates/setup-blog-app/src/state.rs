//! Application state (Model in TEA pattern)

use setup_blog_core::Section;
use tracing::{debug, info};

use crate::account::AccountMenuState;
use crate::auth::AuthOutcome;
use crate::config::SiteSettings;
use crate::doc_view_state::DocViewState;
use crate::nav::{self, NavBarModel, NavMenuState, ViewportState};
use crate::pages::{self, Page};
use crate::routes::{self, View};

/// Which surface receives keys. Overlays stack above `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Normal,
    /// Compact-mode link overlay
    NavMenu,
    AccountMenu,
    /// `:` path entry
    RoutePrompt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

#[derive(Debug)]
pub struct AppState {
    pub settings: SiteSettings,
    /// Fixed documentation content
    pub sections: Vec<Section>,
    /// Current route path
    pub route: String,
    pub viewport: ViewportState,
    pub nav_menu: NavMenuState,
    pub doc_view: DocViewState,
    /// Open account menu
    pub account: Option<AccountMenuState>,
    /// Open route prompt and its buffer
    pub route_prompt: Option<String>,
    /// Last thing the auth collaborator said
    pub auth_status: Option<AuthOutcome>,
    phase: AppPhase,
}

impl AppState {
    pub fn new(settings: SiteSettings, sections: Vec<Section>) -> Self {
        // Expanded until the first resize reports a real width
        let viewport = ViewportState::new(
            settings.navbar.breakpoint_px,
            settings.navbar.breakpoint_px,
        );
        Self {
            settings,
            sections,
            route: routes::HOME_PATH.to_string(),
            viewport,
            nav_menu: NavMenuState::new(),
            doc_view: DocViewState::new(),
            account: None,
            route_prompt: None,
            auth_status: None,
            phase: AppPhase::Running,
        }
    }

    pub fn with_route(mut self, path: impl Into<String>) -> Self {
        self.route = path.into();
        self
    }

    // ─────────────────────────────────────────────────────────
    // Derived views
    // ─────────────────────────────────────────────────────────

    pub fn view(&self) -> View {
        routes::resolve(&self.route)
    }

    /// Top-most surface: route prompt, then account menu, then nav overlay.
    pub fn ui_mode(&self) -> UiMode {
        if self.route_prompt.is_some() {
            UiMode::RoutePrompt
        } else if self.account.is_some() {
            UiMode::AccountMenu
        } else if self.nav_menu.is_open() {
            UiMode::NavMenu
        } else {
            UiMode::Normal
        }
    }

    pub fn nav_bar(&self) -> NavBarModel {
        NavBarModel::build(
            &self.settings.navbar.links,
            &self.route,
            &self.viewport,
            &self.nav_menu,
        )
    }

    pub fn page(&self, year: i32) -> Page<'_> {
        pages::compose(&self.route, &self.sections, &self.settings.social, year)
    }

    /// Rows taken by the fixed navigation header.
    pub fn header_rows(&self) -> u16 {
        self.settings
            .tui
            .header_rows(&self.settings.navbar, self.viewport.is_compact())
    }

    pub fn anchor_margin_rows(&self) -> usize {
        usize::from(
            self.settings
                .tui
                .anchor_margin_rows(&self.settings, self.viewport.is_compact()),
        )
    }

    // ─────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────

    /// Go to `path`. Closes the nav overlay and resets the documentation
    /// scroll. Unknown paths are kept and render the not-found view.
    pub fn navigate(&mut self, path: &str) {
        self.nav_menu.close();
        if self.route == path {
            debug!("Already at {}", path);
            return;
        }
        info!("Route {} -> {}", self.route, path);
        self.route = path.to_string();
        self.doc_view.reset();
    }

    /// Open the compact overlay with the selected link highlighted.
    pub fn open_nav_menu(&mut self) {
        let start = nav::selected_index(&self.settings.navbar.links, &self.route).unwrap_or(0);
        self.nav_menu.open(start);
        debug!("Nav overlay opened");
    }

    /// Apply a new terminal width.
    pub fn resize(&mut self, columns: u16) {
        let width_px = self.settings.tui.columns_to_px(columns);
        if self.viewport.observe(width_px).is_some() && !self.viewport.is_compact() {
            // the overlay only exists in compact mode
            self.nav_menu.close();
        }
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
