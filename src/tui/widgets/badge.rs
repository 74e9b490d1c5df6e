//! Colored status badge

use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::models::invoice::STATUS_PAID;

/// Badge palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeColor {
    #[default]
    Blue,
    Green,
}

impl BadgeColor {
    /// Get the color for this badge
    pub fn color(&self) -> Color {
        match self {
            Self::Blue => Color::Blue,
            Self::Green => Color::Green,
        }
    }
}

/// A short label drawn on a colored background
pub fn badge(text: &str, color: BadgeColor) -> Span<'static> {
    Span::styled(
        format!(" {text} "),
        Style::default().fg(Color::Black).bg(color.color()),
    )
}

/// Badge for an invoice status: green when paid, blue otherwise
pub fn status_badge(status: &str) -> Span<'static> {
    let color = if status == STATUS_PAID {
        BadgeColor::Green
    } else {
        BadgeColor::Blue
    };
    badge(status, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paid_is_green() {
        assert_eq!(status_badge("paid").style.bg, Some(Color::Green));
    }

    #[test]
    fn test_other_statuses_are_blue() {
        assert_eq!(status_badge("draft").style.bg, Some(Color::Blue));
        assert_eq!(status_badge("").style.bg, Some(Color::Blue));
        assert_eq!(status_badge("draft").content, " draft ");
    }
}
