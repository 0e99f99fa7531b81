//! Message types for the application (TEA pattern)

use crate::auth::AuthOutcome;
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Terminal was resized (columns, rows)
    Resize { columns: u16, rows: u16 },

    /// Tick event for periodic updates
    Tick,

    /// Quit (q, Esc with nothing open, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Jump to a path (link, route prompt, `--route`)
    Navigate(String),

    /// Always-visible home control
    GoHome,

    /// Expanded mode: activate inline link N (0-based)
    ActivateInlineLink(usize),

    /// Compact mode: the trigger was activated
    OpenNavMenu,

    /// Dismiss the overlay without navigating
    CloseNavMenu,

    NavMenuUp,
    NavMenuDown,

    /// Activate the highlighted overlay item
    NavMenuSelect,

    /// Follow the landing card's control
    ActivateLandingControl,

    // ─────────────────────────────────────────────────────────
    // Documentation Messages
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
    TocNext,
    TocPrev,

    /// Jump to the highlighted sidebar entry
    TocActivate,

    /// Jump to section N
    JumpToSection(usize),

    // ─────────────────────────────────────────────────────────
    // Route Prompt Messages
    // ─────────────────────────────────────────────────────────
    OpenRoutePrompt,
    CloseRoutePrompt,
    RoutePromptInput(char),
    RoutePromptBackspace,
    RoutePromptSubmit,

    // ─────────────────────────────────────────────────────────
    // Account Menu Messages
    // ─────────────────────────────────────────────────────────
    ToggleAccountMenu,
    CloseAccountMenu,
    AccountInput(char),
    AccountBackspace,
    AccountNextField,
    AccountPrevField,
    AccountSwitchForm,
    AccountSubmit,
    Logout,

    /// The auth collaborator finished
    AuthCompleted(AuthOutcome),
}
