//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: top bar, tab bar, main panel,
//! status bar and footer.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Product name and tagline
    pub top_bar: Rect,
    /// Tab selector
    pub tabs: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar
    pub status_bar: Rect,
    /// Footer line
    pub footer: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Top bar
                Constraint::Length(1), // Tabs
                Constraint::Min(5),    // Main area
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Footer
            ])
            .split(area);

        Self {
            top_bar: chunks[0],
            tabs: chunks[1],
            main: chunks[2],
            status_bar: chunks[3],
            footer: chunks[4],
        }
    }
}

/// Form on the left, list on the right
pub struct PanelLayout {
    pub form: Rect,
    pub list: Rect,
}

impl PanelLayout {
    /// Split the inside of a section one third / two thirds
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
            .split(area);

        Self {
            form: chunks[0],
            list: chunks[1],
        }
    }
}

/// Stack `count` rows of `height` at the top of `area`, followed by the rest
pub fn stack(area: Rect, height: u16, count: usize) -> Vec<Rect> {
    let mut constraints = vec![Constraint::Length(height); count];
    constraints.push(Constraint::Min(0));
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Create a centered rect for overlays
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_fills_height() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.top_bar.y, 0);
        assert_eq!(layout.footer.y, 39);
        assert_eq!(layout.main.height, 40 - 2 - 1 - 1 - 1);
    }

    #[test]
    fn test_stack_leaves_remainder_last() {
        let rows = stack(Rect::new(0, 0, 30, 20), 3, 2);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].y, 3);
        assert_eq!(rows[2].height, 14);
    }
}
