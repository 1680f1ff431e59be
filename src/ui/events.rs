use crossterm::event::{self, Event, KeyEvent};
use std::thread;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::shutdown::ShutdownHandle;

/// Poll interval upper bound, so the shutdown flag is noticed quickly.
const POLL_SLICE: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),
    Tick,
}

/// Reads terminal events on a dedicated thread and hands them to the UI loop.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let spawned = thread::Builder::new()
            .name("terminal-events".to_string())
            .spawn(move || read_loop(tx, tick_rate, shutdown));
        if let Err(err) = spawned {
            tracing::error!("Failed to spawn event thread: {}", err);
        }

        Self { rx }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

fn read_loop(tx: mpsc::UnboundedSender<AppEvent>, tick_rate: Duration, shutdown: ShutdownHandle) {
    let mut last_tick = Instant::now();
    loop {
        if shutdown.is_shutting_down() || tx.is_closed() {
            break;
        }

        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(POLL_SLICE);

        match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(event) => {
                    if let Some(app_event) = translate(event) {
                        if tx.send(app_event).is_err() {
                            break;
                        }
                    }
                }
                Err(err) => {
                    tracing::error!("Terminal read error: {}", err);
                    break;
                }
            },
            Ok(false) => {}
            Err(err) => {
                tracing::error!("Terminal poll error: {}", err);
                break;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
    tracing::debug!("Event thread finished");
}

fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => Some(AppEvent::Key(key)),
        Event::Paste(text) => Some(AppEvent::Paste(text)),
        Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
        _ => None,
    }
}
