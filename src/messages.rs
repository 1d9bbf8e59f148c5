//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::editable::MoveTarget;
use crate::model::{FocusTarget, NotificationKind};

/// Composer-level messages (whole-message replacement, emoji)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeMsg {
    /// Replace the message text
    SetMessage(String),
    /// Append an emoji glyph to the message
    InsertEmoji(String),
    /// Append the palette emoji at this index (emoji button click)
    InsertEmojiAt(usize),
}

/// Hashtag messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagMsg {
    /// Replace the tag draft text
    SetDraft(String),
    /// Commit the draft (Enter in the tag input, Add button)
    SubmitDraft,
    /// Add a specific tag
    Add(String),
    /// Remove every tag equal to this one
    Remove(String),
    /// Remove the chip at this display index
    RemoveAt(usize),
}

/// Editing messages applied to the focused text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMsg {
    InsertChar(char),
    /// Insert text at the caret (paste)
    InsertText(String),
    /// Enter in the message field
    InsertNewline,
    DeleteBackward,
    DeleteForward,
    DeleteWordBackward,
    Move(MoveTarget),
    /// Set caret from a mouse click
    SetCursor { line: usize, column: usize },
}

/// UI messages (focus, pointer, notifications, blink)
#[derive(Debug, Clone, PartialEq)]
pub enum UiMsg {
    Focus(FocusTarget),
    FocusNext,
    FocusPrev,
    /// Pointer moved (physical pixels)
    PointerMoved { x: f64, y: f64 },
    /// Left click (physical pixels)
    Click { x: f64, y: f64 },
    /// Toggle cursor visibility (blink timer)
    BlinkCursor,
    /// Show a transient notification
    Notify { text: String, kind: NotificationKind },
    /// Drop the notification if expired
    ExpireNotification,
}

/// Application-level messages
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Window resized
    Resize(u32, u32),
    /// DPI scale factor changed
    ScaleFactorChanged(f64),
    /// Copy the composed post to the clipboard
    Export,
    /// Clipboard write finished (worker thread)
    ClipboardWriteCompleted(Result<(), String>),
    /// Paste into the focused field
    Paste,
    /// Clipboard read finished (worker thread)
    ClipboardReadCompleted(Result<String, String>),
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Compose(ComposeMsg),
    Tag(TagMsg),
    Field(FieldMsg),
    Ui(UiMsg),
    App(AppMsg),
}

impl Msg {
    /// Create an insert character message
    pub fn insert_char(ch: char) -> Self {
        Msg::Field(FieldMsg::InsertChar(ch))
    }

    /// Create a caret movement message
    pub fn move_cursor(target: MoveTarget) -> Self {
        Msg::Field(FieldMsg::Move(target))
    }

    /// Create a resize message
    pub fn resize(width: u32, height: u32) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }

    pub fn set_message(text: impl Into<String>) -> Self {
        Msg::Compose(ComposeMsg::SetMessage(text.into()))
    }

    pub fn add_tag(tag: impl Into<String>) -> Self {
        Msg::Tag(TagMsg::Add(tag.into()))
    }

    pub fn remove_tag(tag: impl Into<String>) -> Self {
        Msg::Tag(TagMsg::Remove(tag.into()))
    }
}
