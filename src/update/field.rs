//! Text field editing handlers
//!
//! Edits go to whichever field has focus. Enter in the tag input commits
//! the draft instead of inserting a line break.

use crate::commands::Cmd;
use crate::editable::Position;
use crate::messages::{FieldMsg, TagMsg};
use crate::model::{AppModel, FocusTarget};

use super::tags::update_tags;

pub fn update_field(model: &mut AppModel, msg: FieldMsg) -> Option<Cmd> {
    if model.ui.focus == FocusTarget::TagDraft && msg == FieldMsg::InsertNewline {
        return update_tags(model, TagMsg::SubmitDraft);
    }

    let field = model.focused_field_mut()?;
    let changed = match msg {
        FieldMsg::InsertChar(ch) => field.insert_char(ch),
        FieldMsg::InsertText(text) => field.insert_text(&text),
        FieldMsg::InsertNewline => field.insert_newline(),
        FieldMsg::DeleteBackward => field.delete_backward(),
        FieldMsg::DeleteForward => field.delete_forward(),
        FieldMsg::DeleteWordBackward => field.delete_word_backward(),
        FieldMsg::Move(target) => {
            field.move_cursor(target);
            true
        }
        FieldMsg::SetCursor { line, column } => {
            field.set_position(Position::new(line, column));
            true
        }
    };

    if !changed {
        return None;
    }
    model.ui.reset_cursor_blink();
    Some(Cmd::Redraw)
}
