//! Overview dashboard
//!
//! Static placeholder metrics; nothing here is loaded from the backend.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    Frame,
};

use crate::tui::widgets::{MetricCard, CARD_HEIGHT};

const CARDS: [MetricCard<'static>; 3] = [
    MetricCard {
        title: "Sales (This Month)",
        value: "IDR 0",
        hint: "Forecast: Coming Soon",
        accent: Color::Blue,
    },
    MetricCard {
        title: "Top Product",
        value: "-",
        hint: "AI Insights: Coming Soon",
        accent: Color::Green,
    },
    MetricCard {
        title: "Stock Alerts",
        value: "0",
        hint: "Restock Prediction: Coming Soon",
        accent: Color::Yellow,
    },
];

/// Render the three overview cards side by side
pub fn render(frame: &mut Frame, area: Rect) {
    let row = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CARD_HEIGHT), Constraint::Min(0)])
        .split(area)[0];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(row);

    for (card, column) in CARDS.into_iter().zip(columns.iter()) {
        frame.render_widget(card, *column);
    }
}
