//! TUI Views module
//!
//! One view per tab, plus the header, status bar and footer around them.

pub mod customers;
pub mod header;
pub mod invoices;
pub mod overview;
pub mod products;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::app::{App, InputMode};
use super::dialogs;
use super::layout::AppLayout;
use crate::api::Backend;
use crate::panels::Panel;

/// Render the entire application
pub fn render<B: Backend>(frame: &mut Frame, app: &App<B>) {
    let layout = AppLayout::new(frame.area());

    header::render_top_bar(frame, layout.top_bar);
    header::render_tabs(frame, app.active_tab(), layout.tabs);

    let editing = app.input_mode == InputMode::Editing;
    let backend = app.effects.backend();
    match &app.panel {
        Panel::Overview => overview::render(frame, layout.main),
        Panel::Customers(panel) => customers::render(frame, panel, backend, editing, layout.main),
        Panel::Products(panel) => products::render(frame, panel, backend, editing, layout.main),
        Panel::Invoices(panel) => invoices::render(frame, panel, backend, editing, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);
    status_bar::render_footer(frame, layout.footer);

    if app.show_help {
        dialogs::help::render(frame, app.active_tab());
    }
}

/// One red line for the panel's last error, if any
fn render_error(frame: &mut Frame, error: Option<&str>, area: Rect) {
    if let Some(message) = error {
        let line = Line::styled(format!("! {message}"), Style::default().fg(Color::Red));
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// The `API: <url>` hint under each form
fn api_hint(endpoint: String) -> Paragraph<'static> {
    Paragraph::new(Line::styled(
        format!("API: {endpoint}"),
        Style::default().fg(Color::DarkGray),
    ))
}
