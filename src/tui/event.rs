//! Event handling for the TUI
//!
//! Terminal events (key presses, resize) are polled on a dedicated thread.
//! Request outcomes from the runtime are sent through the same channel, so
//! the UI loop sees one ordered stream.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::panels::{Deliver, Outcome};

/// Events handled by the UI loop
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
    /// A backend request finished
    Outcome(Outcome),
}

impl Deliver for mpsc::Sender<Event> {
    fn deliver(&self, outcome: Outcome) {
        if self.send(Event::Outcome(outcome)).is_err() {
            debug!("Event loop gone; dropping outcome");
        }
    }
}

/// Event handler for terminal events
pub struct EventHandler {
    /// Event sender, cloned for outcome delivery
    sender: mpsc::Sender<Event>,
    /// Event receiver
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let poller = sender.clone();
        thread::spawn(move || poll_terminal(&poller, tick_rate));

        Self { sender, receiver }
    }

    /// A sender that delivers into this handler's queue
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.sender.clone()
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

/// Forward terminal events until the receiver is dropped
fn poll_terminal(sender: &mpsc::Sender<Event>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        let ready = match event::poll(timeout) {
            Ok(ready) => ready,
            Err(e) => {
                warn!(error = %e, "Failed to poll terminal events");
                return;
            }
        };

        if ready {
            let forwarded = match event::read() {
                Ok(CrosstermEvent::Key(key)) => Some(Event::Key(key)),
                Ok(CrosstermEvent::Resize(width, height)) => Some(Event::Resize(width, height)),
                Ok(_) => None,
                Err(e) => {
                    warn!(error = %e, "Failed to read terminal event");
                    return;
                }
            };
            if let Some(event) = forwarded {
                if sender.send(event).is_err() {
                    return;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if sender.send(Event::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
