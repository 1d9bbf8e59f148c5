//! Edit constraints for text fields.
//!
//! Constraints define what a field accepts, not how long it may get.
//! Neither field truncates input: over-limit is a display condition.

/// Constraints that limit what a text field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditConstraints {
    /// Allow multiple lines (Enter inserts newline vs submits)
    pub allow_multiline: bool,
}

impl Default for EditConstraints {
    fn default() -> Self {
        Self::single_line()
    }
}

impl EditConstraints {
    /// Message body: newlines allowed
    pub const fn multi_line() -> Self {
        Self {
            allow_multiline: true,
        }
    }

    /// Hashtag draft: a single line
    pub const fn single_line() -> Self {
        Self {
            allow_multiline: false,
        }
    }

    /// Check whether a typed character may be inserted
    pub fn accepts(&self, ch: char) -> bool {
        if ch == '\n' || ch == '\r' {
            return self.allow_multiline && ch == '\n';
        }
        !ch.is_control() || ch == '\t'
    }

    /// Prepare pasted text for insertion.
    ///
    /// Multi-line fields normalize `\r\n` to `\n`; single-line fields drop
    /// line breaks entirely. Nothing else is rewritten.
    pub fn filter_pasted(&self, text: &str) -> String {
        let text = text.replace("\r\n", "\n");
        if self.allow_multiline {
            text.replace('\r', "\n")
        } else {
            text.chars().filter(|&c| c != '\n' && c != '\r').collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_rejects_newline() {
        let c = EditConstraints::single_line();
        assert!(!c.accepts('\n'));
        assert!(c.accepts('a'));
        assert!(c.accepts('#'));
    }

    #[test]
    fn test_multi_line_accepts_newline_but_not_cr() {
        let c = EditConstraints::multi_line();
        assert!(c.accepts('\n'));
        assert!(!c.accepts('\r'));
    }

    #[test]
    fn test_control_chars_rejected() {
        let c = EditConstraints::multi_line();
        assert!(!c.accepts('\u{8}'));
        assert!(!c.accepts('\u{7f}'));
        assert!(c.accepts('\t'));
    }

    #[test]
    fn test_filter_pasted() {
        assert_eq!(
            EditConstraints::single_line().filter_pasted("a\r\nb\nc"),
            "abc"
        );
        assert_eq!(
            EditConstraints::multi_line().filter_pasted("a\r\nb\rc"),
            "a\nb\nc"
        );
    }
}
