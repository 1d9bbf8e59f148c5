//! App message handlers (window events, export, clipboard results)

use crate::commands::Cmd;
use crate::messages::{AppMsg, FieldMsg};
use crate::model::{AppModel, FocusTarget, Notification};

use super::field::update_field;
use super::ui::notify_error;

/// Handle app messages (window events, clipboard round-trips)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.window_size = (width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::ScaleFactorChanged(scale_factor) => {
            model.scale_factor = scale_factor;
            Some(Cmd::ReinitializeRenderer)
        }

        AppMsg::Export => match model.composer.export() {
            Ok(text) => {
                tracing::info!("Exporting {} chars to clipboard", text.chars().count());
                Some(Cmd::CopyToClipboard { text })
            }
            Err(block) => {
                tracing::debug!("Export blocked: {}", block);
                notify_error(model, format!("Cannot copy: {}", block));
                Some(Cmd::Redraw)
            }
        },

        AppMsg::ClipboardWriteCompleted(result) => {
            match result {
                Ok(()) => model.ui.notify(Notification::info("Copied to clipboard")),
                Err(e) => {
                    tracing::warn!("Clipboard write failed: {}", e);
                    notify_error(model, format!("Clipboard error: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::Paste => {
            if model.ui.focus == FocusTarget::None {
                return None;
            }
            Some(Cmd::ReadClipboard)
        }

        AppMsg::ClipboardReadCompleted(result) => match result {
            Ok(text) => update_field(model, FieldMsg::InsertText(text)),
            Err(e) => {
                tracing::warn!("Clipboard read failed: {}", e);
                notify_error(model, format!("Clipboard error: {}", e));
                Some(Cmd::Redraw)
            }
        },

        AppMsg::Quit => Some(Cmd::Quit),
    }
}
