//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, info, warn};

use crate::account::AccountMenuState;
use crate::auth::AuthRequest;
use crate::message::Message;
use crate::pages;
use crate::routes::{self, View};
use crate::state::AppState;

use super::{keys, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns an optional action for the event loop to execute
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Resize { columns, rows } => {
            debug!("Resize {}x{}", columns, rows);
            state.resize(columns);
            UpdateResult::none()
        }

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(path) => {
            state.navigate(&path);
            UpdateResult::none()
        }

        Message::GoHome => UpdateResult::message(Message::Navigate(routes::HOME_PATH.into())),

        Message::ActivateInlineLink(index) => {
            if state.viewport.is_compact() {
                return UpdateResult::none();
            }
            match state.settings.navbar.links.get(index) {
                Some(link) => UpdateResult::message(Message::Navigate(link.path.clone())),
                None => UpdateResult::none(),
            }
        }

        Message::OpenNavMenu => {
            if state.viewport.is_compact() {
                state.open_nav_menu();
            }
            UpdateResult::none()
        }

        Message::CloseNavMenu => {
            state.nav_menu.close();
            UpdateResult::none()
        }

        Message::NavMenuUp => {
            state.nav_menu.highlight_prev(state.settings.navbar.links.len());
            UpdateResult::none()
        }

        Message::NavMenuDown => {
            state.nav_menu.highlight_next(state.settings.navbar.links.len());
            UpdateResult::none()
        }

        Message::NavMenuSelect => {
            if !state.nav_menu.is_open() {
                return UpdateResult::none();
            }
            let target = state
                .settings
                .navbar
                .links
                .get(state.nav_menu.highlighted())
                .map(|link| link.path.clone());
            match target {
                // navigate closes the overlay in the same update
                Some(path) => state.navigate(&path),
                None => state.nav_menu.close(),
            }
            UpdateResult::none()
        }

        Message::ActivateLandingControl => {
            if state.view() != View::Landing {
                return UpdateResult::none();
            }
            UpdateResult::message(Message::Navigate(pages::landing().control.path))
        }

        // ─────────────────────────────────────────────────────────
        // Documentation
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll(state, |v| v.scroll_up(1)),
        Message::ScrollDown => scroll(state, |v| v.scroll_down(1)),
        Message::PageUp => scroll(state, |v| v.page_up()),
        Message::PageDown => scroll(state, |v| v.page_down()),
        Message::ScrollToTop => scroll(state, |v| v.scroll_to_top()),
        Message::ScrollToBottom => scroll(state, |v| v.scroll_to_bottom()),

        Message::TocNext => {
            let len = state.sections.len();
            scroll(state, |v| v.select_next(len))
        }

        Message::TocPrev => scroll(state, |v| v.select_prev()),

        Message::TocActivate => {
            if state.view() != View::Documentation || state.sections.is_empty() {
                return UpdateResult::none();
            }
            UpdateResult::message(Message::JumpToSection(state.doc_view.toc_selected))
        }

        Message::JumpToSection(index) => {
            if state.view() != View::Documentation || index >= state.sections.len() {
                return UpdateResult::none();
            }
            let margin = state.anchor_margin_rows();
            debug!("Jump to {}", state.sections[index].anchor());
            state.doc_view.jump_to(index, margin);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Route prompt
        // ─────────────────────────────────────────────────────────
        Message::OpenRoutePrompt => {
            state.nav_menu.close();
            state.route_prompt = Some(state.route.clone());
            UpdateResult::none()
        }

        Message::CloseRoutePrompt => {
            state.route_prompt = None;
            UpdateResult::none()
        }

        Message::RoutePromptInput(c) => {
            if let Some(buffer) = state.route_prompt.as_mut() {
                buffer.push(c);
            }
            UpdateResult::none()
        }

        Message::RoutePromptBackspace => {
            if let Some(buffer) = state.route_prompt.as_mut() {
                buffer.pop();
            }
            UpdateResult::none()
        }

        Message::RoutePromptSubmit => match state.route_prompt.take() {
            Some(buffer) if !buffer.trim().is_empty() => {
                UpdateResult::message(Message::Navigate(buffer.trim().to_string()))
            }
            _ => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Account menu
        // ─────────────────────────────────────────────────────────
        Message::ToggleAccountMenu => {
            if state.account.take().is_none() {
                state.nav_menu.close();
                state.account = Some(AccountMenuState::new());
                debug!("Account menu opened");
            }
            UpdateResult::none()
        }

        Message::CloseAccountMenu => {
            state.account = None;
            UpdateResult::none()
        }

        Message::AccountInput(c) => account(state, |a| a.input_char(c)),
        Message::AccountBackspace => account(state, |a| a.backspace()),
        Message::AccountNextField => account(state, |a| a.focus_next()),
        Message::AccountPrevField => account(state, |a| a.focus_prev()),

        Message::AccountSwitchForm => {
            let show_registration = state.settings.site.show_registration;
            account(state, |a| {
                a.switch_form(show_registration);
            })
        }

        Message::AccountSubmit => {
            let Some(menu) = state.account.as_mut() else {
                return UpdateResult::none();
            };
            if menu.pending {
                return UpdateResult::none();
            }
            match menu.request() {
                Some(request) => {
                    menu.pending = true;
                    info!("Submitting {}", request.kind());
                    UpdateResult::action(UpdateAction::Authenticate(request))
                }
                None => UpdateResult::none(),
            }
        }

        Message::Logout => {
            if let Some(menu) = state.account.as_mut() {
                if menu.pending {
                    return UpdateResult::none();
                }
                menu.pending = true;
            }
            UpdateResult::action(UpdateAction::Authenticate(AuthRequest::Logout))
        }

        Message::AuthCompleted(outcome) => {
            if !outcome.success {
                warn!("Auth failed: {}", outcome.message);
            }
            state.account = None;
            state.auth_status = Some(outcome);
            UpdateResult::none()
        }
    }
}

fn scroll(
    state: &mut AppState,
    f: impl FnOnce(&mut crate::doc_view_state::DocViewState),
) -> UpdateResult {
    if state.view() == View::Documentation {
        f(&mut state.doc_view);
    }
    UpdateResult::none()
}

fn account(state: &mut AppState, f: impl FnOnce(&mut AccountMenuState)) -> UpdateResult {
    if let Some(menu) = state.account.as_mut() {
        f(menu);
    }
    UpdateResult::none()
}
