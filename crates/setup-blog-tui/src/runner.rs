//! Main TUI runner - entry points and event loop

use std::sync::Arc;
use std::time::Duration;

use ratatui::DefaultTerminal;
use setup_blog_app::auth::{AuthService, UnconfiguredAuth};
use setup_blog_app::config::SiteSettings;
use setup_blog_app::message::Message;
use setup_blog_app::AppState;
use setup_blog_core::prelude::*;
use setup_blog_core::Section;
use tokio::sync::mpsc;

use crate::{actions, event, process, render, signals, terminal};

/// Run the reader with no auth service behind the account menu.
pub async fn run(
    settings: SiteSettings,
    sections: Vec<Section>,
    initial_route: Option<String>,
) -> Result<()> {
    run_with_auth(settings, sections, initial_route, Arc::new(UnconfiguredAuth)).await
}

/// Run the reader, sending account requests to `auth`.
pub async fn run_with_auth<A>(
    settings: SiteSettings,
    sections: Vec<Section>,
    initial_route: Option<String>,
    auth: Arc<A>,
) -> Result<()>
where
    A: AuthService + Sync + 'static,
{
    terminal::install_panic_hook();

    let tick = Duration::from_millis(settings.tui.tick_rate_ms);
    let mut state = AppState::new(settings, sections);
    if let Some(route) = initial_route {
        state = state.with_route(route);
    }
    info!("Starting at {}", state.route);

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, &msg_tx, &auth, tick);

    ratatui::restore();
    result
}

fn run_loop<A>(
    terminal: &mut DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    auth: &Arc<A>,
    tick: Duration,
) -> Result<()>
where
    A: AuthService + Sync + 'static,
{
    // the layout mode depends on the real width, known only now
    let size = terminal.size()?;
    dispatch(
        state,
        Message::Resize {
            columns: size.width,
            rows: size.height,
        },
        msg_tx,
        auth,
    );

    while !state.should_quit() {
        // Signals and finished auth requests
        while let Ok(msg) = msg_rx.try_recv() {
            dispatch(state, msg, msg_tx, auth);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll(tick)? {
            dispatch(state, message, msg_tx, auth);
        }
    }

    info!("Quit requested");
    Ok(())
}

fn dispatch<A>(state: &mut AppState, message: Message, msg_tx: &mpsc::Sender<Message>, auth: &Arc<A>)
where
    A: AuthService + Sync + 'static,
{
    for action in process::process_message(state, message) {
        actions::handle_action(action, msg_tx.clone(), Arc::clone(auth));
    }
}
