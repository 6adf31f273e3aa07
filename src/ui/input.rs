/// Single-line editor state for the search box.
#[derive(Debug, Default)]
pub(crate) struct SearchInput {
    value: String,
    /// Cursor position in characters, 0..=value chars.
    cursor: usize,
}

impl SearchInput {
    pub(crate) fn with_text(text: &str) -> Self {
        Self {
            value: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.value
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub(crate) fn insert(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    pub(crate) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
    }

    pub(crate) fn delete(&mut self) {
        if self.cursor >= self.value.chars().count() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
    }

    pub(crate) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(crate) fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub(crate) fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    pub(crate) fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_at_the_cursor() {
        let mut input = SearchInput::with_text("rect");
        input.move_home();
        input.move_right();
        input.move_right();
        input.insert('a');
        assert_eq!(input.text(), "react");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn backspace_and_delete_edit_around_the_cursor() {
        let mut input = SearchInput::with_text("react");
        input.backspace();
        assert_eq!(input.text(), "reac");
        input.move_home();
        input.delete();
        assert_eq!(input.text(), "eac");
        input.backspace();
        assert_eq!(input.text(), "eac");
    }

    #[test]
    fn handles_multibyte_characters() {
        let mut input = SearchInput::with_text("héllo");
        input.move_home();
        input.move_right();
        input.move_right();
        input.backspace();
        assert_eq!(input.text(), "hllo");
    }

    #[test]
    fn clear_resets_value_and_cursor() {
        let mut input = SearchInput::with_text("react");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }
}
