use anyhow::Context;

use crate::config::Config;
use crate::shutdown::{self, ShutdownHandle};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::greeting::GreetingViewModel;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the greeting screen until the user quits or a shutdown signal arrives.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let (mut terminal, guard) = setup_terminal().context("failed to prepare terminal")?;

    let shutdown = ShutdownHandle::new();
    shutdown::listen_for_signals(shutdown.clone());
    let mut events = EventHandler::new(config.ui.tick_rate(), shutdown.clone());

    let view_model = GreetingViewModel::new();
    let mut app = App::new();
    let mut states = app.start(&view_model);
    tracing::info!(tick_rate_ms = config.ui.tick_rate_ms, "Greeting screen started");

    loop {
        terminal
            .draw(|frame| draw(frame, &app))
            .context("failed to draw frame")?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            Some(state) = states.next() => app.render(&state),
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => handle_key(&mut app, key),
                Some(AppEvent::Paste(text)) => app.on_paste(&text),
                Some(AppEvent::Resize(_, _) | AppEvent::Tick) => {}
                // Event thread is gone, nothing can reach the screen anymore
                None => app.request_quit(),
            },
            _ = shutdown.wait() => app.request_quit(),
        }
    }

    shutdown.signal();
    let last = view_model.current();
    drop(states);
    drop(view_model);
    drop(guard);
    tracing::info!(label = %last.hello_message, "Greeting screen stopped");
    Ok(())
}
