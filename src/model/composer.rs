//! Composer state - message, tags, tag draft and everything derived from them
//!
//! All derived values are recomputed on demand from the three owned cells.
//! Nothing here can fail except `export`, which reports why the post cannot
//! leave the form yet.

use serde::Serialize;
use thiserror::Error;

use super::tags::TagSet;
use crate::editable::TextField;

/// Character limit for a post
pub const CHAR_LIMIT: i64 = 280;

/// Emoji palette used when the config does not provide one
pub const DEFAULT_EMOJIS: &[&str] = &[
    "😊", "🎉", "👍", "🔥", "✨", "💡", "🌟", "💪", "🙌", "❤️",
];

/// Text shown in the preview when there is nothing composed yet
pub const PREVIEW_PLACEHOLDER: &str = "Your post preview will appear here...";

/// Why a post cannot be exported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExportBlock {
    #[error("message is empty")]
    EmptyMessage,
    #[error("post is {over} character(s) over the limit")]
    OverLimit { over: i64 },
}

/// Composed output: `trim(message + " " + "#tag #tag ...")`
pub fn compose(message: &str, tags: &TagSet) -> String {
    format!("{} {}", message, tags.hashtags()).trim().to_string()
}

/// Length of `text` as the budget counts it, in UTF-16 code units.
///
/// An astral-plane emoji such as `😊` counts 2, `✨` counts 1.
pub fn post_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Remaining budget: `CHAR_LIMIT - (len(message) + len(join(tags, " ")))`.
///
/// The `#` prefixes and the separator before the hashtag block are not
/// counted. See [`Composer::budget_discrepancy`].
pub fn remaining_budget(message: &str, tags: &TagSet) -> i64 {
    let counted = post_len(message) + tags.counted_len();
    CHAR_LIMIT - counted as i64
}

/// Snapshot of the composed post and its derived values (`--print --json`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposeSummary {
    pub message: String,
    pub tags: Vec<String>,
    pub composed: String,
    pub remaining: i64,
    pub over_limit: bool,
    pub composed_len: usize,
    pub can_export: bool,
}

/// The post being composed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composer {
    /// Message body (multi-line)
    pub message: TextField,
    /// Committed hashtags
    pub tags: TagSet,
    /// In-progress hashtag (single line)
    pub tag_draft: TextField,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Composer {
    pub fn new() -> Self {
        Self {
            message: TextField::multi_line(),
            tags: TagSet::new(),
            tag_draft: TextField::single_line(),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn message(&self) -> &str {
        self.message.text()
    }

    /// Replace the message. Always accepted, never truncated.
    pub fn set_message(&mut self, text: impl Into<String>) {
        self.message.set_text(text);
    }

    /// Append an emoji to the end of the message
    pub fn insert_emoji(&mut self, emoji: &str) {
        self.message.append(emoji);
    }

    pub fn tag_draft(&self) -> &str {
        self.tag_draft.text()
    }

    pub fn set_tag_draft(&mut self, text: impl Into<String>) {
        self.tag_draft.set_text(text);
    }

    /// Add a tag. On success the draft is cleared; on a no-op (empty or
    /// duplicate) the draft is left as it was.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        if self.tags.add(tag) {
            self.tag_draft.clear();
            true
        } else {
            false
        }
    }

    /// Commit the current draft as a tag
    pub fn submit_tag_draft(&mut self) -> bool {
        let draft = self.tag_draft.text().to_string();
        self.add_tag(&draft)
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    // =========================================================================
    // Derivations
    // =========================================================================

    pub fn remaining(&self) -> i64 {
        remaining_budget(self.message(), &self.tags)
    }

    pub fn is_over_limit(&self) -> bool {
        self.remaining() < 0
    }

    pub fn composed(&self) -> String {
        compose(self.message(), &self.tags)
    }

    /// Length of the composed output, in the budget's unit
    pub fn composed_len(&self) -> usize {
        post_len(&self.composed())
    }

    /// How many units the composed output has beyond what the budget counts
    pub fn budget_discrepancy(&self) -> i64 {
        self.composed_len() as i64 - (CHAR_LIMIT - self.remaining())
    }

    /// Text for the preview pane
    pub fn preview(&self) -> String {
        let composed = self.composed();
        if composed.is_empty() {
            PREVIEW_PLACEHOLDER.to_string()
        } else {
            composed
        }
    }

    /// Reason export is unavailable, if any. An empty message wins over
    /// being over the limit.
    pub fn export_block(&self) -> Option<ExportBlock> {
        if self.message.is_empty() {
            return Some(ExportBlock::EmptyMessage);
        }
        let remaining = self.remaining();
        if remaining < 0 {
            return Some(ExportBlock::OverLimit { over: -remaining });
        }
        None
    }

    pub fn can_export(&self) -> bool {
        self.export_block().is_none()
    }

    /// The text to place on the clipboard
    pub fn export(&self) -> Result<String, ExportBlock> {
        match self.export_block() {
            Some(block) => Err(block),
            None => Ok(self.composed()),
        }
    }

    pub fn summary(&self) -> ComposeSummary {
        ComposeSummary {
            message: self.message().to_string(),
            tags: self.tags.as_slice().to_vec(),
            composed: self.composed(),
            remaining: self.remaining(),
            over_limit: self.is_over_limit(),
            composed_len: self.composed_len(),
            can_export: self.can_export(),
        }
    }
}
