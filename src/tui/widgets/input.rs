//! Form input widgets
//!
//! `LabeledInput` draws a `TextField` inside a titled box with placeholder
//! and cursor support. `Selector` draws a cycling choice such as the
//! customer picker.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::panels::TextField;

/// Rows taken by one input including its border
pub const INPUT_HEIGHT: u16 = 3;

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// A text field with a label and placeholder
#[derive(Debug, Clone)]
pub struct LabeledInput<'a> {
    field: &'a TextField,
    label: &'a str,
    placeholder: &'a str,
    focused: bool,
}

impl<'a> LabeledInput<'a> {
    pub fn new(label: &'a str, field: &'a TextField) -> Self {
        Self {
            field,
            label,
            placeholder: "",
            focused: false,
        }
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for LabeledInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.label),
                Style::default().fg(Color::Gray),
            ))
            .borders(Borders::ALL)
            .border_style(border_style(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let content = self.field.value();
        let (text, style) = if content.is_empty() && !self.focused {
            (self.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            (content, Style::default().fg(Color::White))
        };

        let alignment = if self.field.is_numeric() && !self.focused {
            Alignment::Right
        } else {
            Alignment::Left
        };
        Paragraph::new(text)
            .style(style)
            .alignment(alignment)
            .render(inner, buf);

        if self.focused {
            let cursor_x = inner.x + self.field.cursor() as u16;
            if cursor_x < inner.x + inner.width {
                let cursor_char = content.chars().nth(self.field.cursor()).unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    inner.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

/// A choice cycled with the arrow keys
#[derive(Debug, Clone)]
pub struct Selector<'a> {
    label: &'a str,
    value: Option<&'a str>,
    empty: &'a str,
    focused: bool,
}

impl<'a> Selector<'a> {
    /// `empty` is shown when nothing is selected
    pub fn new(label: &'a str, value: Option<&'a str>, empty: &'a str) -> Self {
        Self {
            label,
            value,
            empty,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for Selector<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.label),
                Style::default().fg(Color::Gray),
            ))
            .borders(Borders::ALL)
            .border_style(border_style(self.focused));

        let value = match self.value {
            Some(v) => Span::styled(v, Style::default().fg(Color::White)),
            None => Span::styled(self.empty, Style::default().fg(Color::DarkGray)),
        };
        let arrow = if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let line = Line::from(vec![
            Span::styled("◀ ", arrow),
            value,
            Span::styled(" ▶", arrow),
        ]);

        Paragraph::new(line).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_placeholder_when_empty() {
        let field = TextField::new();
        let area = Rect::new(0, 0, 30, INPUT_HEIGHT);
        let mut buf = Buffer::empty(area);

        LabeledInput::new("Name", &field)
            .placeholder("PT Contoh Jaya")
            .render(area, &mut buf);

        assert!(row(&buf, 0).contains("Name"));
        assert!(row(&buf, 1).contains("PT Contoh Jaya"));
        assert_eq!(buf[(1, 1)].fg, Color::DarkGray);
    }

    #[test]
    fn test_focused_shows_content_and_cursor() {
        let field = TextField::new().with_content("Toko");
        let area = Rect::new(0, 0, 20, INPUT_HEIGHT);
        let mut buf = Buffer::empty(area);

        LabeledInput::new("Name", &field)
            .placeholder("PT Contoh Jaya")
            .focused(true)
            .render(area, &mut buf);

        assert!(row(&buf, 1).contains("Toko"));
        assert_eq!(buf[(5, 1)].bg, Color::Cyan);
    }

    #[test]
    fn test_selector_empty_text() {
        let area = Rect::new(0, 0, 30, INPUT_HEIGHT);
        let mut buf = Buffer::empty(area);

        Selector::new("Customer", None, "Select customer").render(area, &mut buf);

        assert!(row(&buf, 1).contains("Select customer"));
    }
}
