//! Terminal event abstraction.
//!
//! Wraps crossterm events into the small enum the handler consumes and runs
//! a background task forwarding them over a channel, so the main loop can
//! simply await.  When the terminal stays quiet for one tick interval a
//! [`AppEvent::Tick`] is emitted instead — ticks drive every animation in
//! the app, so they must keep flowing while the user is idle, and an input
//! burst (mouse drags, key repeat) naturally pauses animation work.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::mpsc;

/// Animation frame interval (~30 fps) and idle-poll timeout.
pub const TICK_RATE: Duration = Duration::from_millis(33);

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Spawns the background reader task and returns its channel.
pub fn spawn_event_reader() -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            let app_event = if event::poll(TICK_RATE).unwrap_or(false) {
                match event::read() {
                    // Enhanced-keyboard terminals also report releases; act
                    // on presses and repeats only.
                    Ok(CtEvent::Key(k)) if k.kind != KeyEventKind::Release => AppEvent::Key(k),
                    Ok(CtEvent::Mouse(m)) => AppEvent::Mouse(m),
                    Ok(CtEvent::Resize(w, h)) => AppEvent::Resize(w, h),
                    _ => continue,
                }
            } else {
                AppEvent::Tick
            };

            if tx.send(app_event).is_err() {
                break; // receiver dropped
            }
        }
    });

    rx
}
