//! Status bar and footer
//!
//! The status bar shows the input mode, the latest status message and key
//! hints for the current mode.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::api::Backend;
use crate::tui::app::{App, InputMode};

pub const FOOTER: &str = "Mini ERP • Modular • API-first • PPN Ready";

/// Render the status bar
pub fn render<B: Backend>(frame: &mut Frame, app: &App<B>, area: Rect) {
    let (mode, mode_color) = match app.input_mode {
        InputMode::Normal => (" NORMAL ", Color::Blue),
        InputMode::Editing => (" EDITING ", Color::Green),
    };

    let mut spans = vec![Span::styled(
        mode,
        Style::default()
            .fg(Color::Black)
            .bg(mode_color)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.input_mode {
        InputMode::Normal => " q:Quit  1-4:Tab  r:Refresh  i:Edit  ?:Help ",
        InputMode::Editing => " Esc:Done  Tab:Next  ←/→:Choose  Enter:Submit ",
    };

    let left_len: usize = spans.iter().map(|s| s.width()).sum();
    let hints_len = Span::raw(hints).width();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints_len);
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the footer line
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::styled(FOOTER, Style::default().fg(Color::DarkGray)))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
