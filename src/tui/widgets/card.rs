//! Metric card for the overview dashboard

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Rows taken by a card including its border
pub const CARD_HEIGHT: u16 = 6;

/// A headline value with a title and a small hint underneath
#[derive(Debug, Clone)]
pub struct MetricCard<'a> {
    pub title: &'a str,
    pub value: &'a str,
    pub hint: &'a str,
    pub accent: Color,
}

impl Widget for MetricCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent));

        let lines = vec![
            Line::styled(self.title, Style::default().fg(Color::Gray)),
            Line::styled(
                self.value,
                Style::default()
                    .fg(self.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::styled(self.hint, Style::default().fg(Color::DarkGray)),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
