//! UI state - focus, pointer, notifications and cursor blink

use std::time::{Duration, Instant};

use crate::layout::HitTarget;

/// How long a notification stays on screen
pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(3);

/// Which text field receives keyboard input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusTarget {
    #[default]
    Message,
    TagDraft,
    /// Nothing focused; keys are ignored except shortcuts
    None,
}

impl FocusTarget {
    /// Next field in Tab order
    pub fn next(self) -> Self {
        match self {
            FocusTarget::Message => FocusTarget::TagDraft,
            FocusTarget::TagDraft | FocusTarget::None => FocusTarget::Message,
        }
    }

    /// Previous field in Tab order (only two fields, so same cycle)
    pub fn prev(self) -> Self {
        self.next()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// Transient message with auto-expiry
#[derive(Debug, Clone)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
    pub expires_at: Instant,
}

impl Notification {
    pub fn new(text: impl Into<String>, kind: NotificationKind, duration: Duration) -> Self {
        Self {
            text: text.into(),
            kind,
            expires_at: Instant::now() + duration,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, NotificationKind::Info, NOTIFICATION_DURATION)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, NotificationKind::Error, NOTIFICATION_DURATION)
    }

    /// Check if this notification has expired
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI state
#[derive(Debug, Clone)]
pub struct UiState {
    pub focus: FocusTarget,
    /// Widget under the mouse pointer
    pub hovered: Option<HitTarget>,
    /// Last known pointer position in physical pixels
    pub pointer: (f64, f64),
    pub notification: Option<Notification>,
    /// Whether the cursor is currently visible (for blinking)
    pub cursor_visible: bool,
    /// Timestamp of last cursor blink state change
    pub last_cursor_blink: Instant,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            focus: FocusTarget::default(),
            hovered: None,
            pointer: (0.0, 0.0),
            notification: None,
            cursor_visible: true,
            last_cursor_blink: Instant::now(),
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Drop the notification if it has expired.
    /// Returns true if one was removed (needs redraw)
    pub fn clear_expired_notification(&mut self) -> bool {
        if self.notification.as_ref().is_some_and(|n| n.is_expired()) {
            self.notification = None;
            true
        } else {
            false
        }
    }

    /// Reset cursor blink timer (call after user input)
    pub fn reset_cursor_blink(&mut self) {
        self.cursor_visible = true;
        self.last_cursor_blink = Instant::now();
    }

    /// Update cursor blink state based on elapsed time
    /// Returns true if the state changed (needs redraw)
    pub fn update_cursor_blink(&mut self, blink_interval: Duration) -> bool {
        if self.last_cursor_blink.elapsed() >= blink_interval {
            self.cursor_visible = !self.cursor_visible;
            self.last_cursor_blink = Instant::now();
            true
        } else {
            false
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles() {
        assert_eq!(FocusTarget::Message.next(), FocusTarget::TagDraft);
        assert_eq!(FocusTarget::TagDraft.next(), FocusTarget::Message);
        assert_eq!(FocusTarget::None.next(), FocusTarget::Message);
    }

    #[test]
    fn test_expired_notification_is_cleared() {
        let mut ui = UiState::new();
        ui.notify(Notification::new("gone", NotificationKind::Info, Duration::ZERO));
        assert!(ui.clear_expired_notification());
        assert!(ui.notification.is_none());
        assert!(!ui.clear_expired_notification());
    }

    #[test]
    fn test_live_notification_is_kept() {
        let mut ui = UiState::new();
        ui.notify(Notification::error("clipboard unavailable"));
        assert!(!ui.clear_expired_notification());
        assert_eq!(
            ui.notification.as_ref().map(|n| n.kind),
            Some(NotificationKind::Error)
        );
    }
}
