//! Composer message handlers (message replacement, emoji)

use crate::commands::Cmd;
use crate::messages::ComposeMsg;
use crate::model::AppModel;

pub fn update_compose(model: &mut AppModel, msg: ComposeMsg) -> Option<Cmd> {
    match msg {
        ComposeMsg::SetMessage(text) => {
            model.composer.set_message(text);
            model.ui.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        ComposeMsg::InsertEmoji(emoji) => {
            model.composer.insert_emoji(&emoji);
            model.ui.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        ComposeMsg::InsertEmojiAt(index) => {
            let Some(emoji) = model.emojis().get(index).cloned() else {
                tracing::debug!("No emoji at palette index {}", index);
                return None;
            };
            update_compose(model, ComposeMsg::InsertEmoji(emoji))
        }
    }
}
