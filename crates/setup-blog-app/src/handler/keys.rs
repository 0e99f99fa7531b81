//! Key event handlers for each UI mode

use crate::input_key::InputKey;
use crate::message::Message;
use crate::routes::View;
use crate::state::{AppState, UiMode};

/// Convert a key press into a message for the current mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C always quits, whatever is open
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode() {
        UiMode::RoutePrompt => handle_key_route_prompt(key),
        UiMode::AccountMenu => handle_key_account_menu(key),
        UiMode::NavMenu => handle_key_nav_menu(key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

fn handle_key_route_prompt(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseRoutePrompt),
        InputKey::Enter => Some(Message::RoutePromptSubmit),
        InputKey::Backspace => Some(Message::RoutePromptBackspace),
        InputKey::Char(c) => Some(Message::RoutePromptInput(c)),
        _ => None,
    }
}

fn handle_key_account_menu(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseAccountMenu),
        InputKey::Tab | InputKey::Down => Some(Message::AccountNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::AccountPrevField),
        InputKey::Enter => Some(Message::AccountSubmit),
        InputKey::F(2) => Some(Message::AccountSwitchForm),
        InputKey::CharCtrl('o') => Some(Message::Logout),
        InputKey::Backspace => Some(Message::AccountBackspace),
        InputKey::Char(c) => Some(Message::AccountInput(c)),
        _ => None,
    }
}

fn handle_key_nav_menu(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('m') => Some(Message::CloseNavMenu),
        InputKey::Up | InputKey::Char('k') => Some(Message::NavMenuUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::NavMenuDown),
        InputKey::Enter => Some(Message::NavMenuSelect),
        InputKey::Char('h') => Some(Message::GoHome),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(n) = key.link_digit() {
        return (!state.viewport.is_compact()).then_some(Message::ActivateInlineLink(n - 1));
    }

    match key {
        InputKey::Char('q') | InputKey::Esc => return Some(Message::Quit),
        InputKey::Char('h') => return Some(Message::GoHome),
        InputKey::Char(':') => return Some(Message::OpenRoutePrompt),
        InputKey::Char('a') => return Some(Message::ToggleAccountMenu),
        InputKey::Char('m') if state.viewport.is_compact() => return Some(Message::OpenNavMenu),
        _ => {}
    }

    match state.view() {
        View::Landing => match key {
            InputKey::Enter => Some(Message::ActivateLandingControl),
            _ => None,
        },
        View::Documentation => handle_key_documentation(key),
        View::NotFound => None,
    }
}

fn handle_key_documentation(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::Char('g') | InputKey::Home => Some(Message::ScrollToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::ScrollToBottom),
        InputKey::Char(']') => Some(Message::TocNext),
        InputKey::Char('[') => Some(Message::TocPrev),
        InputKey::Enter => Some(Message::TocActivate),
        _ => None,
    }
}
