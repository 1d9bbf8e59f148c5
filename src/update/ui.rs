//! UI message handlers (focus, pointer, notifications, cursor blink)

use std::time::Duration;

use crate::commands::Cmd;
use crate::layout::HitTarget;
use crate::messages::{AppMsg, ComposeMsg, FieldMsg, TagMsg, UiMsg};
use crate::model::{AppModel, FocusTarget, Notification, NOTIFICATION_DURATION};

use super::app::update_app;
use super::compose::update_compose;
use super::field::update_field;
use super::tags::update_tags;

pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::Focus(target) => {
            model.ui.focus = target;
            model.ui.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        UiMsg::FocusNext => {
            let next = model.ui.focus.next();
            update_ui(model, UiMsg::Focus(next))
        }

        UiMsg::FocusPrev => {
            let prev = model.ui.focus.prev();
            update_ui(model, UiMsg::Focus(prev))
        }

        UiMsg::PointerMoved { x, y } => {
            model.ui.pointer = (x, y);
            let hovered = model.layout().hit_test(x as f32, y as f32);
            if hovered != model.ui.hovered {
                model.ui.hovered = hovered;
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        UiMsg::Click { x, y } => handle_click(model, x as f32, y as f32),

        UiMsg::BlinkCursor => {
            if model.ui.update_cursor_blink(Duration::from_millis(500)) {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        UiMsg::Notify { text, kind } => {
            model
                .ui
                .notify(Notification::new(text, kind, NOTIFICATION_DURATION));
            Some(Cmd::Redraw)
        }

        UiMsg::ExpireNotification => model
            .ui
            .clear_expired_notification()
            .then_some(Cmd::Redraw),
    }
}

/// Dispatch a left click to the widget under the pointer
fn handle_click(model: &mut AppModel, x: f32, y: f32) -> Option<Cmd> {
    let layout = model.layout();
    let Some(target) = layout.hit_test(x, y) else {
        return None;
    };
    tracing::debug!("Click on {:?}", target);

    match target {
        HitTarget::MessageField => {
            let pos = layout.message_position_at(&model.composer.message, x, y);
            model.ui.focus = FocusTarget::Message;
            update_field(
                model,
                FieldMsg::SetCursor {
                    line: pos.line,
                    column: pos.column,
                },
            )
        }
        HitTarget::TagInput => {
            let pos = layout.tag_input_position_at(&model.composer.tag_draft, x, y);
            model.ui.focus = FocusTarget::TagDraft;
            update_field(
                model,
                FieldMsg::SetCursor {
                    line: pos.line,
                    column: pos.column,
                },
            )
        }
        HitTarget::EmojiButton(index) => update_compose(model, ComposeMsg::InsertEmojiAt(index)),
        HitTarget::AddTagButton => update_tags(model, TagMsg::SubmitDraft),
        HitTarget::ChipRemove(index) => update_tags(model, TagMsg::RemoveAt(index)),
        HitTarget::ExportButton => {
            if model.composer.can_export() {
                update_app(model, AppMsg::Export)
            } else {
                None
            }
        }
        HitTarget::Chip(_) | HitTarget::Preview => None,
    }
}

/// Show an error notification (shared by app handlers)
pub(super) fn notify_error(model: &mut AppModel, text: impl Into<String>) {
    model.ui.notify(Notification::error(text));
}
