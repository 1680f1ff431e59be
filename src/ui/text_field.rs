//! Single-line editable text buffer.

/// Text field contents with a cursor measured in chars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text left of the cursor.
    pub fn before_cursor(&self) -> &str {
        &self.text[..self.byte_index(self.cursor)]
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' || ch == '\r' {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    /// Insert pasted text. Line breaks are dropped since the field is single-line.
    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.insert_char(ch);
        }
    }

    /// Delete the char before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
    }

    /// Delete the char under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(index, _)| index)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_with(text: &str) -> TextField {
        let mut field = TextField::new();
        field.insert_str(text);
        field
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut field = TextField::new();
        field.insert_char('a');
        field.insert_char('c');
        field.move_left();
        field.insert_char('b');
        assert_eq!(field.text(), "abc");
        assert_eq!(field.cursor, 2);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut field = field_with("ab");
        field.move_home();
        field.backspace();
        assert_eq!(field.text(), "ab");
        assert_eq!(field.cursor, 0);
    }

    #[test]
    fn backspace_and_delete_remove_around_cursor() {
        let mut field = field_with("abcd");
        field.move_left();
        field.move_left();
        field.backspace();
        assert_eq!(field.text(), "acd");
        field.delete();
        assert_eq!(field.text(), "ad");
        assert_eq!(field.cursor, 1);
    }

    #[test]
    fn delete_at_end_is_noop() {
        let mut field = field_with("ab");
        field.delete();
        assert_eq!(field.text(), "ab");
    }

    #[test]
    fn multibyte_chars_edit_by_char() {
        let mut field = field_with("日本");
        assert_eq!(field.cursor, 2);
        field.move_left();
        field.insert_char('x');
        assert_eq!(field.text(), "日x本");
        field.backspace();
        field.backspace();
        assert_eq!(field.text(), "本");
    }

    #[test]
    fn paste_drops_line_breaks() {
        let mut field = TextField::new();
        field.insert_str("Wor\r\nld");
        assert_eq!(field.text(), "World");
        assert_eq!(field.cursor, 5);
    }

    #[test]
    fn cursor_moves_are_clamped() {
        let mut field = field_with("ab");
        field.move_right();
        assert_eq!(field.cursor, 2);
        field.move_home();
        field.move_left();
        assert_eq!(field.cursor, 0);
        field.move_end();
        assert_eq!(field.cursor, 2);
    }

    #[test]
    fn before_cursor_slices_on_char_boundary() {
        let mut field = field_with("日本語");
        field.move_left();
        assert_eq!(field.before_cursor(), "日本");
        field.move_home();
        assert_eq!(field.before_cursor(), "");
    }
}
