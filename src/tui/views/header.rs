//! Top bar and tab selector

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

use crate::panels::Tab;

pub const PRODUCT_KICKER: &str = "Mini ERP";
pub const PRODUCT_NAME: &str = "Linqkeun";
pub const TAGLINE: &str = "AI-Augmented • Indonesia Ready";

/// Render the product name with the tagline on the right
pub fn render_top_bar(frame: &mut Frame, area: Rect) {
    let brand = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("■ ", Style::default().fg(Color::Blue)),
            Span::styled(PRODUCT_KICKER, Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                PRODUCT_NAME,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ]);
    frame.render_widget(brand, area);

    let tagline = Paragraph::new(Line::styled(TAGLINE, Style::default().fg(Color::Gray)))
        .alignment(Alignment::Right);
    frame.render_widget(tagline, area);
}

/// Render the tab selector with the active tab highlighted
pub fn render_tabs(frame: &mut Frame, active: Tab, area: Rect) {
    let titles = Tab::ALL
        .iter()
        .map(|tab| format!("{} {}", tab.index() + 1, tab.label()));

    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" ");

    frame.render_widget(tabs, area);
}
