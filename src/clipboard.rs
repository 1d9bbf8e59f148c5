//! System clipboard access
//!
//! Wrapper over `arboard`. Calls block, so the runtime runs them on a worker
//! thread and reports back through a message. The `arboard::Clipboard` is
//! kept alive for the whole session: on X11 and Wayland the copied text is
//! served by its owner and would vanish with it.

use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),
    #[error("clipboard write failed: {0}")]
    Write(#[source] arboard::Error),
    #[error("clipboard read failed: {0}")]
    Read(#[source] arboard::Error),
}

/// Shared handle to a lazily opened, long-lived system clipboard.
///
/// Clones share the same underlying clipboard, so a worker thread can use a
/// clone while the runtime keeps ownership alive.
#[derive(Clone, Default)]
pub struct SystemClipboard {
    inner: Arc<Mutex<Option<arboard::Clipboard>>>,
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.is_open())
            .finish()
    }
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the system clipboard has been opened yet
    pub fn is_open(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Option<arboard::Clipboard>> {
        // A panicking worker leaves the clipboard itself usable
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn with_clipboard<T>(
        &self,
        f: impl FnOnce(&mut arboard::Clipboard) -> Result<T, ClipboardError>,
    ) -> Result<T, ClipboardError> {
        let mut guard = self.lock();
        let mut clipboard = match guard.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(ClipboardError::Unavailable)?,
        };
        let result = f(&mut clipboard);
        *guard = Some(clipboard);
        result
    }

    /// Replace the clipboard contents with `text`
    pub fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.with_clipboard(|clipboard| {
            clipboard
                .set_text(text.to_owned())
                .map_err(ClipboardError::Write)
        })
    }

    /// Read text from the clipboard
    pub fn read_text(&self) -> Result<String, ClipboardError> {
        self.with_clipboard(|clipboard| clipboard.get_text().map_err(ClipboardError::Read))
    }
}
