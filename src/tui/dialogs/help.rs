//! Help overlay
//!
//! Lists the shortcuts that apply on the active tab. Any key closes it.

use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table},
    Frame,
};

use crate::panels::Tab;
use crate::tui::layout::centered_rect;

const ACCENT: Color = Color::Rgb(37, 99, 235);

type Shortcut = (&'static str, &'static str);

const GLOBAL: &[Shortcut] = &[
    ("q / Ctrl+C", "Quit"),
    ("?", "Toggle this help"),
    ("1-4", "Jump to tab"),
    ("←/→  h/l", "Previous or next tab"),
    ("r", "Reload the current tab"),
];

const FORM: &[Shortcut] = &[
    ("i / Enter", "Edit the form"),
    ("Tab", "Next field"),
    ("Shift+Tab", "Previous field"),
    ("Enter", "Submit while editing"),
    ("Esc", "Back to browsing"),
];

const INVOICE: &[Shortcut] = &[
    ("n / Ctrl+N", "New line item"),
    ("Ctrl+D", "Drop the focused item"),
    ("←/→", "Pick customer or product"),
];

/// Render the help overlay
pub fn render(frame: &mut Frame, tab: Tab) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let table = Table::new(rows(tab), [Constraint::Length(14), Constraint::Fill(1)])
        .column_spacing(2)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT))
                .title(format!(" Keys: {} ", tab.label()))
                .title_bottom(Line::from(" any key closes ").right_aligned()),
        );

    frame.render_widget(table, area);
}

fn sections(tab: Tab) -> Vec<(&'static str, &'static [Shortcut])> {
    match tab {
        Tab::Overview => vec![("Navigation", GLOBAL)],
        Tab::Customers | Tab::Products => vec![("Navigation", GLOBAL), ("Form", FORM)],
        Tab::Invoices => vec![
            ("Navigation", GLOBAL),
            ("Form", FORM),
            ("Line items", INVOICE),
        ],
    }
}

fn rows(tab: Tab) -> Vec<Row<'static>> {
    let mut rows = Vec::new();
    for (title, shortcuts) in sections(tab) {
        if !rows.is_empty() {
            rows.push(Row::new(vec![Cell::from("")]));
        }
        rows.push(Row::new(vec![Cell::from(title)]).style(
            Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD),
        ));
        rows.extend(shortcuts.iter().map(|(key, action)| {
            Row::new(vec![
                Cell::from(*key).style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(*action).style(Style::default().fg(Color::Gray)),
            ])
        }));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(tab: Tab) -> Vec<&'static str> {
        sections(tab)
            .into_iter()
            .flat_map(|(_, shortcuts)| shortcuts.iter().map(|(_, action)| *action))
            .collect()
    }

    #[test]
    fn test_invoice_keys_only_on_invoices() {
        assert!(actions(Tab::Invoices).contains(&"Drop the focused item"));
        assert!(!actions(Tab::Customers).contains(&"Drop the focused item"));
        assert!(!actions(Tab::Overview).contains(&"Edit the form"));
    }

    #[test]
    fn test_overview_lists_navigation_only() {
        assert_eq!(sections(Tab::Overview).len(), 1);
        assert!(actions(Tab::Overview).contains(&"Quit"));
    }
}
