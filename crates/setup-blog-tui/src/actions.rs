//! Executes side effects requested by the update function

use std::sync::Arc;

use setup_blog_app::auth::{self, AuthService};
use setup_blog_app::message::Message;
use setup_blog_app::UpdateAction;
use setup_blog_core::prelude::*;
use tokio::sync::mpsc;

/// Spawn the work for `action`; its result comes back as a message.
pub fn handle_action<A>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, auth: Arc<A>)
where
    A: AuthService + Sync + 'static,
{
    match action {
        UpdateAction::Authenticate(request) => {
            debug!("Spawning {} request", request.kind());
            tokio::spawn(async move {
                let outcome = auth::perform(&*auth, request).await;
                if let Err(e) = deliver(&msg_tx, Message::AuthCompleted(outcome)).await {
                    warn!("Auth outcome dropped: {}", e);
                }
            });
        }
    }
}

/// Hand a result back to the event loop.
async fn deliver(msg_tx: &mpsc::Sender<Message>, message: Message) -> Result<()> {
    msg_tx
        .send(message)
        .await
        .map_err(|_| Error::channel_send("event loop closed"))
}
