//! TextField - a string with a caret.
//!
//! The caret is stored as a char offset so that multi-byte text (emoji,
//! CJK) never splits a code point. Line/column positions are derived on
//! demand; fields are small enough that a linear scan is fine.

use super::constraints::EditConstraints;

/// A position in a field (line and column in chars, both 0-indexed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Target for caret movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// One character left
    Left,
    /// One character right
    Right,
    /// One line up (multi-line only)
    Up,
    /// One line down (multi-line only)
    Down,
    /// Start of the current line
    LineStart,
    /// End of the current line
    LineEnd,
    /// Previous word boundary
    WordLeft,
    /// Next word boundary
    WordRight,
    /// Start of the field
    Start,
    /// End of the field
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Whitespace,
    Word,
    Symbol,
}

fn char_class(ch: char) -> CharClass {
    if ch.is_whitespace() {
        CharClass::Whitespace
    } else if ch.is_alphanumeric() || ch == '_' {
        CharClass::Word
    } else {
        CharClass::Symbol
    }
}

/// Editable text with a single caret.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    /// Caret as a char offset into `text` (0..=len_chars)
    cursor: usize,
    /// Column to return to on vertical movement through shorter lines
    desired_column: Option<usize>,
    constraints: EditConstraints,
}

impl TextField {
    /// Create an empty field with the given constraints
    pub fn new(constraints: EditConstraints) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            desired_column: None,
            constraints,
        }
    }

    /// Create an empty multi-line field
    pub fn multi_line() -> Self {
        Self::new(EditConstraints::multi_line())
    }

    /// Create an empty single-line field
    pub fn single_line() -> Self {
        Self::new(EditConstraints::single_line())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn constraints(&self) -> EditConstraints {
        self.constraints
    }

    /// Caret position as a char offset
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length in chars
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole text. Always accepted, stored verbatim; the caret
    /// moves to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.len_chars();
        self.desired_column = None;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.desired_column = None;
    }

    /// Append at the end regardless of where the caret is, then move the
    /// caret to the end.
    pub fn append(&mut self, s: &str) {
        self.text.push_str(s);
        self.cursor = self.len_chars();
        self.desired_column = None;
    }

    /// Convert a char offset to a byte offset (clamped to the end)
    fn byte_offset(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Insert a character at the caret.
    /// Returns false if the constraints reject it.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if !self.constraints.accepts(ch) {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        self.desired_column = None;
        true
    }

    /// Insert a string at the caret (paste). Line breaks are filtered
    /// according to the constraints. Returns false if nothing was inserted.
    pub fn insert_text(&mut self, s: &str) -> bool {
        let filtered = self.constraints.filter_pasted(s);
        if filtered.is_empty() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, &filtered);
        self.cursor += filtered.chars().count();
        self.desired_column = None;
        true
    }

    /// Insert a newline at the caret (multi-line only)
    pub fn insert_newline(&mut self) -> bool {
        self.insert_char('\n')
    }

    /// Delete the character before the caret (Backspace)
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        self.desired_column = None;
        true
    }

    /// Delete the character after the caret (Delete)
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.len_chars() {
            return false;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.text.replace_range(start..end, "");
        self.desired_column = None;
        true
    }

    /// Delete back to the previous word boundary (Ctrl/Option+Backspace)
    pub fn delete_word_backward(&mut self) -> bool {
        let target = self.word_left_offset();
        if target == self.cursor {
            return false;
        }
        let start = self.byte_offset(target);
        let end = self.byte_offset(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor = target;
        self.desired_column = None;
        true
    }

    /// Move the caret
    pub fn move_cursor(&mut self, target: MoveTarget) {
        match target {
            MoveTarget::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                self.desired_column = None;
            }
            MoveTarget::Right => {
                self.cursor = (self.cursor + 1).min(self.len_chars());
                self.desired_column = None;
            }
            MoveTarget::Up | MoveTarget::Down => {
                if !self.constraints.allow_multiline {
                    return;
                }
                let pos = self.position();
                let desired = *self.desired_column.get_or_insert(pos.column);
                let line = if target == MoveTarget::Up {
                    if pos.line == 0 {
                        return;
                    }
                    pos.line - 1
                } else {
                    if pos.line + 1 >= self.line_count() {
                        return;
                    }
                    pos.line + 1
                };
                let column = desired.min(self.line_length(line));
                self.cursor = self.offset_of(Position::new(line, column));
            }
            MoveTarget::LineStart => {
                let pos = self.position();
                self.cursor = self.offset_of(Position::new(pos.line, 0));
                self.desired_column = None;
            }
            MoveTarget::LineEnd => {
                let pos = self.position();
                let len = self.line_length(pos.line);
                self.cursor = self.offset_of(Position::new(pos.line, len));
                self.desired_column = None;
            }
            MoveTarget::WordLeft => {
                self.cursor = self.word_left_offset();
                self.desired_column = None;
            }
            MoveTarget::WordRight => {
                self.cursor = self.word_right_offset();
                self.desired_column = None;
            }
            MoveTarget::Start => {
                self.cursor = 0;
                self.desired_column = None;
            }
            MoveTarget::End => {
                self.cursor = self.len_chars();
                self.desired_column = None;
            }
        }
    }

    fn word_left_offset(&self) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = self.cursor.min(chars.len());
        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        if pos > 0 {
            let class = char_class(chars[pos - 1]);
            while pos > 0 && char_class(chars[pos - 1]) == class {
                pos -= 1;
            }
        }
        pos
    }

    fn word_right_offset(&self) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = self.cursor.min(chars.len());
        if pos < chars.len() {
            let class = char_class(chars[pos]);
            if class != CharClass::Whitespace {
                while pos < chars.len() && char_class(chars[pos]) == class {
                    pos += 1;
                }
            }
        }
        while pos < chars.len() && chars[pos].is_whitespace() && chars[pos] != '\n' {
            pos += 1;
        }
        pos
    }

    // =========================================================================
    // Line/column helpers
    // =========================================================================

    /// Number of lines (always >= 1)
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Iterate over lines (without newlines)
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    /// Get a single line (without newline)
    pub fn line(&self, index: usize) -> Option<&str> {
        self.text.split('\n').nth(index)
    }

    /// Length of a line in chars (0 for out-of-range lines)
    pub fn line_length(&self, index: usize) -> usize {
        self.line(index).map(|l| l.chars().count()).unwrap_or(0)
    }

    /// Caret position as line/column
    pub fn position(&self) -> Position {
        let mut line = 0;
        let mut column = 0;
        for ch in self.text.chars().take(self.cursor) {
            if ch == '\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }
        Position::new(line, column)
    }

    /// Move the caret to a line/column, clamped to the text
    pub fn set_position(&mut self, pos: Position) {
        self.cursor = self.offset_of(pos);
        self.desired_column = None;
    }

    /// Char offset for a line/column, clamped to the text
    fn offset_of(&self, pos: Position) -> usize {
        let last_line = self.line_count() - 1;
        let target_line = pos.line.min(last_line);
        let mut offset = 0;
        for (idx, line) in self.text.split('\n').enumerate() {
            let len = line.chars().count();
            if idx == target_line {
                return offset + pos.column.min(len);
            }
            offset += len + 1;
        }
        self.len_chars()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(text: &str) -> TextField {
        let mut f = TextField::multi_line();
        f.set_text(text);
        f
    }

    #[test]
    fn test_set_text_is_verbatim() {
        let f = field("  hello\nworld  ");
        assert_eq!(f.text(), "  hello\nworld  ");
        assert_eq!(f.cursor(), f.len_chars());
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut f = field("hllo");
        f.set_position(Position::new(0, 1));
        assert!(f.insert_char('e'));
        assert_eq!(f.text(), "hello");
        assert_eq!(f.cursor(), 2);
    }

    #[test]
    fn test_insert_multibyte() {
        let mut f = field("ab");
        f.move_cursor(MoveTarget::Left);
        f.insert_char('🔥');
        assert_eq!(f.text(), "a🔥b");
        assert!(f.delete_backward());
        assert_eq!(f.text(), "ab");
    }

    #[test]
    fn test_single_line_rejects_newline() {
        let mut f = TextField::single_line();
        assert!(!f.insert_newline());
        assert!(f.insert_text("rust\nlang"));
        assert_eq!(f.text(), "rustlang");
    }

    #[test]
    fn test_delete_at_edges_is_noop() {
        let mut f = field("x");
        assert!(!f.delete_forward());
        f.move_cursor(MoveTarget::Start);
        assert!(!f.delete_backward());
        assert!(f.delete_forward());
        assert_eq!(f.text(), "");
    }

    #[test]
    fn test_position_across_lines() {
        let mut f = field("one\ntwo\nthree");
        assert_eq!(f.position(), Position::new(2, 5));
        f.move_cursor(MoveTarget::Up);
        assert_eq!(f.position(), Position::new(1, 3));
        f.move_cursor(MoveTarget::Up);
        assert_eq!(f.position(), Position::new(0, 3));
        f.move_cursor(MoveTarget::Down);
        f.move_cursor(MoveTarget::Down);
        // desired column restored on the longer line
        assert_eq!(f.position(), Position::new(2, 5));
    }

    #[test]
    fn test_line_start_and_end() {
        let mut f = field("ab\ncdef");
        f.set_position(Position::new(1, 2));
        f.move_cursor(MoveTarget::LineStart);
        assert_eq!(f.position(), Position::new(1, 0));
        f.move_cursor(MoveTarget::LineEnd);
        assert_eq!(f.position(), Position::new(1, 4));
    }

    #[test]
    fn test_set_position_clamps() {
        let mut f = field("ab\nc");
        f.set_position(Position::new(9, 9));
        assert_eq!(f.cursor(), 4);
        f.set_position(Position::new(0, 9));
        assert_eq!(f.position(), Position::new(0, 2));
    }

    #[test]
    fn test_word_movement() {
        let mut f = field("hello, big world");
        f.move_cursor(MoveTarget::WordLeft);
        assert_eq!(f.cursor(), 11);
        f.move_cursor(MoveTarget::WordLeft);
        assert_eq!(f.cursor(), 7);
        f.move_cursor(MoveTarget::WordRight);
        assert_eq!(f.cursor(), 11);
    }

    #[test]
    fn test_delete_word_backward() {
        let mut f = field("ship it now");
        assert!(f.delete_word_backward());
        assert_eq!(f.text(), "ship it ");
    }

    #[test]
    fn test_append_ignores_cursor() {
        let mut f = field("hi");
        f.move_cursor(MoveTarget::Start);
        f.append("✨");
        assert_eq!(f.text(), "hi✨");
        assert_eq!(f.cursor(), 3);
    }
}
