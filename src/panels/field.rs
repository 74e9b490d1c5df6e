//! Editable form field
//!
//! A text buffer with a cursor, shared by every form in the panels. The
//! cursor counts characters, not bytes, so names like "Kopi Gayo Ñ" edit
//! correctly.

/// A single-line text field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    /// Current text content
    content: String,
    /// Cursor position in characters
    cursor: usize,
    /// Only accept characters that can appear in a number
    numeric: bool,
}

impl TextField {
    /// Create an empty text field
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty numeric field
    pub fn numeric() -> Self {
        Self {
            numeric: true,
            ..Self::default()
        }
    }

    /// Set initial content, placing the cursor at the end
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.set(content);
        self
    }

    /// Replace the content, placing the cursor at the end
    pub fn set(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.content.chars().count();
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Whether the field holds no text at all
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Whether this field only accepts numeric input
    pub fn is_numeric(&self) -> bool {
        self.numeric
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map_or(self.content.len(), |(i, _)| i)
    }

    fn accepts(&self, c: char) -> bool {
        if self.numeric {
            c.is_ascii_digit() || matches!(c, '.' | '-' | 'e' | 'E')
        } else {
            !c.is_control()
        }
    }

    /// Insert a character at the cursor; returns false if it was rejected
    pub fn insert(&mut self, c: char) -> bool {
        if !self.accepts(c) {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
        true
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.chars().count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut field = TextField::new();
        for c in "Produk".chars() {
            field.insert(c);
        }
        assert_eq!(field.value(), "Produk");

        field.backspace();
        assert_eq!(field.value(), "Produ");
        assert_eq!(field.cursor(), 5);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut field = TextField::new().with_content("Kopi Ñ");
        field.move_left();
        field.insert('é');
        assert_eq!(field.value(), "Kopi éÑ");

        field.move_end();
        field.backspace();
        assert_eq!(field.value(), "Kopi é");
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut field = TextField::new().with_content("abc");
        field.move_start();
        field.delete();
        assert_eq!(field.value(), "bc");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_numeric_rejects_letters() {
        let mut field = TextField::numeric();
        assert!(field.insert('1'));
        assert!(field.insert('.'));
        assert!(field.insert('5'));
        assert!(!field.insert('x'));
        assert_eq!(field.value(), "1.5");
    }

    #[test]
    fn test_set_moves_cursor_to_end() {
        let mut field = TextField::new();
        field.set("15000");
        assert_eq!(field.cursor(), 5);

        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.cursor(), 0);
    }
}
