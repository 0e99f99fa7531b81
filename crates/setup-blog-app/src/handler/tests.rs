//! Tests for handler module

use super::*;
use crate::auth::{AuthOutcome, AuthRequest, Credentials};
use crate::config::SiteSettings;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::routes::View;
use crate::state::{AppState, UiMode};
use setup_blog_core::{Block, NavLink, Section};

fn sections() -> Vec<Section> {
    ["stage-a1", "stage-a2", "stage-a3"]
        .iter()
        .map(|id| {
            Section::new(*id, format!("Title {}", id))
                .with_blocks(vec![Block::Summary { text: "ok".into() }])
        })
        .collect()
}

fn test_state() -> AppState {
    let mut settings = SiteSettings::default();
    settings.navbar.links = vec![NavLink::new("Home", "/"), NavLink::new("Blog", "/blog")];
    AppState::new(settings, sections())
}

/// Run a message and every follow-up message, collecting actions.
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn press(state: &mut AppState, key: InputKey) -> Vec<UpdateAction> {
    run(state, Message::Key(key))
}

fn compact(state: &mut AppState) {
    run(state, Message::Resize { columns: 50, rows: 30 });
}

// ─────────────────────────────────────────────────────────
// Routing and landing
// ─────────────────────────────────────────────────────────

#[test]
fn test_enter_on_landing_goes_to_blog() {
    let mut state = test_state();
    press(&mut state, InputKey::Enter);
    assert_eq!(state.route, "/blog");
    assert_eq!(state.view(), View::Documentation);
}

#[test]
fn test_home_key_from_any_route() {
    let mut state = test_state().with_route("/nowhere");
    press(&mut state, InputKey::Char('h'));
    assert_eq!(state.route, "/");

    compact(&mut state);
    state.navigate("/blog");
    press(&mut state, InputKey::Char('h'));
    assert_eq!(state.route, "/");
}

#[test]
fn test_route_prompt_direct_entry() {
    let mut state = test_state();
    press(&mut state, InputKey::Char(':'));
    assert_eq!(state.ui_mode(), UiMode::RoutePrompt);
    // prefilled with "/"
    for c in "totally-unknown-path".chars() {
        press(&mut state, InputKey::Char(c));
    }
    press(&mut state, InputKey::Enter);
    assert_eq!(state.route_prompt, None);
    assert_eq!(state.route, "/totally-unknown-path");
    assert_eq!(state.view(), View::NotFound);
    assert_eq!(state.nav_bar().selected_count(), 0);
}

#[test]
fn test_route_prompt_escape_keeps_route() {
    let mut state = test_state();
    press(&mut state, InputKey::Char(':'));
    press(&mut state, InputKey::Backspace);
    press(&mut state, InputKey::Esc);
    assert_eq!(state.route, "/");
    assert!(!state.should_quit());
}

// ─────────────────────────────────────────────────────────
// Navigation bar
// ─────────────────────────────────────────────────────────

#[test]
fn test_inline_link_digits_when_expanded() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('2'));
    assert_eq!(state.route, "/blog");
    press(&mut state, InputKey::Char('9'));
    assert_eq!(state.route, "/blog");
}

#[test]
fn test_inline_link_digits_ignored_when_compact() {
    let mut state = test_state();
    compact(&mut state);
    press(&mut state, InputKey::Char('2'));
    assert_eq!(state.route, "/");
}

#[test]
fn test_overlay_select_navigates_and_closes_in_one_update() {
    let mut state = test_state();
    compact(&mut state);
    press(&mut state, InputKey::Char('m'));
    assert!(state.nav_menu.is_open());
    assert_eq!(state.nav_bar().overlay_items().map(|i| i.len()), Some(2));

    press(&mut state, InputKey::Down);
    let result = update(&mut state, Message::NavMenuSelect);
    assert!(result.message.is_none());
    assert_eq!(state.route, "/blog");
    assert!(!state.nav_menu.is_open());
}

#[test]
fn test_overlay_dismiss_does_not_navigate() {
    let mut state = test_state();
    compact(&mut state);
    press(&mut state, InputKey::Char('m'));
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Esc);
    assert!(!state.nav_menu.is_open());
    assert_eq!(state.route, "/");
    assert!(!state.should_quit());
}

#[test]
fn test_trigger_ignored_when_expanded() {
    let mut state = test_state();
    run(&mut state, Message::OpenNavMenu);
    assert!(!state.nav_menu.is_open());
}

#[test]
fn test_overlay_with_empty_links_closes_on_select() {
    let mut state = test_state();
    state.settings.navbar.links.clear();
    compact(&mut state);
    run(&mut state, Message::OpenNavMenu);
    run(&mut state, Message::NavMenuSelect);
    assert!(!state.nav_menu.is_open());
    assert_eq!(state.route, "/");
}

#[test]
fn test_resize_round_trip_restores_inline_links() {
    let mut state = test_state();
    run(&mut state, Message::Resize { columns: 50, rows: 30 });
    let narrow = state.nav_bar();
    assert!(narrow.inline_links().is_empty());
    assert_eq!(narrow.trigger_count(), 1);

    run(&mut state, Message::Resize { columns: 120, rows: 30 });
    let wide = state.nav_bar();
    assert_eq!(wide.trigger_count(), 0);
    let paths: Vec<_> = wide.inline_links().iter().map(|i| i.path.as_str()).collect();
    assert_eq!(paths, vec!["/", "/blog"]);
}

// ─────────────────────────────────────────────────────────
// Documentation
// ─────────────────────────────────────────────────────────

#[test]
fn test_toc_selection_and_jump() {
    let mut state = test_state().with_route("/blog");
    state.doc_view.set_layout(300, 30, vec![0, 100, 200]);
    press(&mut state, InputKey::Char(']'));
    press(&mut state, InputKey::Char(']'));
    press(&mut state, InputKey::Char(']'));
    assert_eq!(state.doc_view.toc_selected, 2);
    press(&mut state, InputKey::Enter);
    // expanded: 96px = 5 rows, header 4 rows -> 1 row margin
    assert_eq!(state.doc_view.offset, 199);
}

#[test]
fn test_jump_out_of_range_ignored() {
    let mut state = test_state().with_route("/blog");
    state.doc_view.set_layout(300, 30, vec![0, 100, 200]);
    run(&mut state, Message::JumpToSection(7));
    assert_eq!(state.doc_view.offset, 0);
}

#[test]
fn test_scroll_keys_only_on_documentation() {
    let mut state = test_state();
    state.doc_view.set_layout(300, 30, vec![0]);
    press(&mut state, InputKey::Char('j'));
    assert_eq!(state.doc_view.offset, 0);

    state.navigate("/blog");
    state.doc_view.set_layout(300, 30, vec![0]);
    press(&mut state, InputKey::Char('j'));
    press(&mut state, InputKey::Char('j'));
    assert_eq!(state.doc_view.offset, 2);
    press(&mut state, InputKey::Char('G'));
    assert_eq!(state.doc_view.offset, 270);
    press(&mut state, InputKey::Char('g'));
    assert_eq!(state.doc_view.offset, 0);
}

// ─────────────────────────────────────────────────────────
// Account menu
// ─────────────────────────────────────────────────────────

#[test]
fn test_account_submit_emits_authenticate() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('a'));
    assert_eq!(state.ui_mode(), UiMode::AccountMenu);
    for c in "glen".chars() {
        press(&mut state, InputKey::Char(c));
    }
    press(&mut state, InputKey::Tab);
    for c in "pw".chars() {
        press(&mut state, InputKey::Char(c));
    }
    let actions = press(&mut state, InputKey::Enter);
    assert_eq!(
        actions,
        vec![UpdateAction::Authenticate(AuthRequest::Login(Credentials {
            username: "glen".into(),
            password: "pw".into(),
        }))]
    );
    assert!(state.account.as_ref().unwrap().pending);

    // second submit while pending is ignored
    assert!(press(&mut state, InputKey::Enter).is_empty());
}

#[test]
fn test_account_keys_do_not_leak_to_normal_mode() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('a'));
    press(&mut state, InputKey::Char('q'));
    press(&mut state, InputKey::Char('h'));
    assert!(!state.should_quit());
    assert_eq!(state.account.as_ref().unwrap().username, "qh");
}

#[test]
fn test_auth_completion_closes_menu_and_keeps_message() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('a'));
    run(
        &mut state,
        Message::AuthCompleted(AuthOutcome::failure("invalid username or password")),
    );
    assert!(state.account.is_none());
    assert_eq!(
        state.auth_status.as_ref().map(|o| o.message.as_str()),
        Some("invalid username or password")
    );
}

#[test]
fn test_register_form_needs_flag() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('a'));
    press(&mut state, InputKey::F(2));
    assert_eq!(
        state.account.as_ref().unwrap().form,
        crate::account::AccountForm::Login
    );

    state.settings.site.show_registration = true;
    press(&mut state, InputKey::F(2));
    assert_eq!(
        state.account.as_ref().unwrap().form,
        crate::account::AccountForm::Register
    );
}

#[test]
fn test_logout_from_account_menu() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('a'));
    let actions = press(&mut state, InputKey::CharCtrl('o'));
    assert_eq!(actions, vec![UpdateAction::Authenticate(AuthRequest::Logout)]);
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_ctrl_c_quits_from_any_mode() {
    let mut state = test_state();
    press(&mut state, InputKey::Char(':'));
    press(&mut state, InputKey::CharCtrl('c'));
    assert!(state.should_quit());
}

#[test]
fn test_esc_quits_when_nothing_open() {
    let mut state = test_state();
    press(&mut state, InputKey::Esc);
    assert!(state.should_quit());
}

#[test]
fn test_handle_key_is_pure() {
    let state = test_state();
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
    assert_eq!(handle_key(&state, InputKey::Char('x')), None);
    assert!(!state.should_quit());
}
