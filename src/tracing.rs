//! Tracing setup and state-diff helpers for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=composer=debug` - only composer state diffs
//! - `RUST_LOG=chirp::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/chirp/logs/chirp.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::Composer;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes
/// to `~/.config/chirp/logs/chirp.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of composer state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerSnapshot {
    pub message_len: usize,
    pub message_cursor: usize,
    pub tags: Vec<String>,
    pub draft: String,
    pub remaining: i64,
    pub can_export: bool,
}

impl ComposerSnapshot {
    pub fn from_composer(composer: &Composer) -> Self {
        Self {
            message_len: composer.message.len_chars(),
            message_cursor: composer.message.cursor(),
            tags: composer.tags.as_slice().to_vec(),
            draft: composer.tag_draft().to_string(),
            remaining: composer.remaining(),
            can_export: composer.can_export(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &ComposerSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.message_len != other.message_len {
            changes.push(format!(
                "message: {} → {} chars",
                self.message_len, other.message_len
            ));
        }
        if self.message_cursor != other.message_cursor {
            changes.push(format!(
                "caret: {} → {}",
                self.message_cursor, other.message_cursor
            ));
        }
        if self.tags != other.tags {
            changes.push(format!("tags: {:?} → {:?}", self.tags, other.tags));
        }
        if self.draft != other.draft {
            changes.push(format!("draft: {:?} → {:?}", self.draft, other.draft));
        }
        if self.remaining != other.remaining {
            changes.push(format!(
                "remaining: {} → {}",
                self.remaining, other.remaining
            ));
        }
        if self.can_export != other.can_export {
            let status = if other.can_export {
                "enabled"
            } else {
                "disabled"
            };
            changes.push(format!("export {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_reports_changes() {
        let mut composer = Composer::new();
        let before = ComposerSnapshot::from_composer(&composer);
        composer.set_message("hi");
        composer.add_tag("rust");
        let after = ComposerSnapshot::from_composer(&composer);

        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("message: 0 → 2 chars"));
        assert!(diff.contains("tags: [] → [\"rust\"]"));
        assert!(diff.contains("export enabled"));
    }

    #[test]
    fn test_diff_none_when_unchanged() {
        let composer = Composer::new();
        let snap = ComposerSnapshot::from_composer(&composer);
        assert_eq!(snap.diff(&snap.clone()), None);
    }
}
