//! Hashtag message handlers

use crate::commands::Cmd;
use crate::messages::TagMsg;
use crate::model::AppModel;

pub fn update_tags(model: &mut AppModel, msg: TagMsg) -> Option<Cmd> {
    let composer = &mut model.composer;
    match msg {
        TagMsg::SetDraft(text) => {
            composer.set_tag_draft(text);
        }

        TagMsg::SubmitDraft => {
            if !composer.submit_tag_draft() {
                tracing::debug!("Tag draft {:?} not added", composer.tag_draft());
            }
        }

        TagMsg::Add(tag) => {
            composer.add_tag(&tag);
        }

        TagMsg::Remove(tag) => {
            composer.remove_tag(&tag);
        }

        TagMsg::RemoveAt(index) => {
            let Some(tag) = composer.tags.get(index).map(str::to_string) else {
                return None;
            };
            composer.remove_tag(&tag);
        }
    }
    Some(Cmd::Redraw)
}
