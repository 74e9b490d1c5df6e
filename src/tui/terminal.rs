//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash,
//! and wires the async runtime, the HTTP backend and the UI loop together.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::api::HttpBackend;
use crate::config::Settings;
use crate::panels::Effects;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application against the configured backend
pub fn run_tui(settings: &Settings) -> Result<()> {
    let base_url = settings.validated_backend_url()?;
    info!(backend_url = %base_url, "Starting TUI");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms));
    let effects = Effects::new(
        Arc::new(HttpBackend::new(base_url)),
        runtime.handle().clone(),
        Arc::new(events.sender()),
    );
    let mut app = App::new(effects);

    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, &mut app, &events);
    restore_terminal()?;

    // Unmount before the runtime goes away so in-flight requests are aborted.
    drop(app);
    runtime.shutdown_background();
    info!("TUI stopped");

    result
}

fn event_loop(terminal: &mut Tui, app: &mut App<HttpBackend>, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| super::views::render(frame, app))?;

        handle_event(app, events.next()?);

        if app.should_quit {
            return Ok(());
        }
    }
}
