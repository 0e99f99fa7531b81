//! Message processing shared by the runner and tests

use setup_blog_app::handler;
use setup_blog_app::message::Message;
use setup_blog_app::{AppState, UpdateAction};

/// Run `message` and every follow-up message through the update function.
///
/// Returns the side effects requested along the way, in order.
pub fn process_message(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);

    while let Some(m) = msg {
        let result = handler::update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_state;
    use setup_blog_app::routes::View;
    use setup_blog_app::InputKey;

    #[test]
    fn test_follow_up_messages_are_chained() {
        let mut state = create_test_state("/", 120);
        // Enter -> ActivateLandingControl -> Navigate
        let actions = process_message(&mut state, Message::Key(InputKey::Enter));
        assert!(actions.is_empty());
        assert_eq!(state.view(), View::Documentation);
    }

    #[test]
    fn test_submit_produces_auth_action() {
        let mut state = create_test_state("/", 120);
        process_message(&mut state, Message::Key(InputKey::Char('a')));
        for c in "glen".chars() {
            process_message(&mut state, Message::Key(InputKey::Char(c)));
        }
        process_message(&mut state, Message::Key(InputKey::Tab));
        for c in "pw".chars() {
            process_message(&mut state, Message::Key(InputKey::Char(c)));
        }
        let actions = process_message(&mut state, Message::Key(InputKey::Enter));

        assert_eq!(actions.len(), 1);
        assert!(matches!(actions[0], UpdateAction::Authenticate(_)));
        assert!(state.account.as_ref().is_some_and(|a| a.pending));
    }
}
