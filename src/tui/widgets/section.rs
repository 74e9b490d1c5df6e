//! Titled section container

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

/// A bordered block with a bold title and an optional right-aligned action hint
pub fn section<'a>(title: &'a str, action: Option<&'a str>) -> Block<'a> {
    let mut block = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if let Some(action) = action {
        block = block.title(
            Line::from(Span::styled(
                format!(" {action} "),
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        );
    }
    block
}
