//! State for the single-line text input shared by the name-entry and
//! message-entry views.

/// Maximum number of characters a composed message may hold.
const MAX_INPUT_CHARS: usize = 2000;

/// Composed text plus cursor position. Cursor indices count characters,
/// not bytes, so multibyte input edits stay on character boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputState {
    text: String,
    cursor: usize,
}

impl InputState {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a character index.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The text before the cursor, for on-screen cursor placement.
    pub fn text_before_cursor(&self) -> &str {
        &self.text[..self.byte_index(self.cursor)]
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Inserts a character at the cursor. Returns false when the input is
    /// already at capacity.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.text.chars().count() >= MAX_INPUT_CHARS {
            return false;
        }

        let at = self.byte_index(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        true
    }

    /// Removes the character before the cursor (backspace).
    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }

        self.cursor -= 1;
        let from = self.byte_index(self.cursor);
        let to = self.byte_index(self.cursor + 1);
        self.text.drain(from..to);
    }

    /// Removes the character under the cursor (delete key).
    pub fn delete_forward(&mut self) {
        if self.cursor >= self.text.chars().count() {
            return;
        }

        let from = self.byte_index(self.cursor);
        let to = self.byte_index(self.cursor + 1);
        self.text.drain(from..to);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(at, _)| at)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputState {
        let mut state = InputState::default();
        for ch in text.chars() {
            state.insert_char(ch);
        }
        state
    }

    #[test]
    fn starts_empty_with_cursor_at_zero() {
        let state = InputState::default();

        assert!(state.is_empty());
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn inserting_advances_cursor() {
        let state = typed("hey");

        assert_eq!(state.text(), "hey");
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn inserts_at_cursor_position() {
        let mut state = typed("hlo");
        state.move_left();
        state.move_left();
        state.insert_char('e');

        assert_eq!(state.text(), "helo");
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn backspace_removes_character_before_cursor() {
        let mut state = typed("hey");
        state.delete_backward();

        assert_eq!(state.text(), "he");
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn backspace_at_start_is_a_noop() {
        let mut state = typed("hey");
        state.move_home();
        state.delete_backward();

        assert_eq!(state.text(), "hey");
    }

    #[test]
    fn delete_forward_removes_character_under_cursor() {
        let mut state = typed("hey");
        state.move_home();
        state.delete_forward();

        assert_eq!(state.text(), "ey");
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn cursor_stays_within_bounds() {
        let mut state = typed("ab");
        state.move_right();
        assert_eq!(state.cursor(), 2);

        state.move_home();
        state.move_left();
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn edits_multibyte_text_on_character_boundaries() {
        let mut state = typed("héy");
        state.move_left();
        state.delete_backward();

        assert_eq!(state.text(), "hy");
    }

    #[test]
    fn text_before_cursor_tracks_edit_position() {
        let mut state = typed("hello");
        state.move_left();
        state.move_left();

        assert_eq!(state.text_before_cursor(), "hel");
    }

    #[test]
    fn refuses_input_past_capacity() {
        let mut state = typed(&"a".repeat(MAX_INPUT_CHARS));

        assert!(!state.insert_char('x'));
        assert_eq!(state.text().chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn clear_resets_text_and_cursor() {
        let mut state = typed("hey");
        state.clear();

        assert!(state.is_empty());
        assert_eq!(state.cursor(), 0);
    }
}
