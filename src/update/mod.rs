//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod compose;
mod field;
mod tags;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::ComposerSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use compose::update_compose;
pub use field::update_field;
pub use tags::update_tags;
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Compose(m) => compose::update_compose(model, m),
        Msg::Tag(m) => tags::update_tags(model, m),
        Msg::Field(m) => field::update_field(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after composer state and logs diffs for debugging.
/// Filters out noisy periodic and pointer messages from logging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::UiMsg;

    let is_noisy = matches!(
        &msg,
        Msg::Ui(UiMsg::BlinkCursor | UiMsg::PointerMoved { .. } | UiMsg::ExpireNotification)
    );

    if is_noisy {
        return update_inner(model, msg);
    }

    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    debug!(target: "message", msg = %msg_name, "processing");

    let before = ComposerSnapshot::from_composer(&model.composer);
    let result = update_inner(model, msg);
    let after = ComposerSnapshot::from_composer(&model.composer);

    if let Some(diff) = before.diff(&after) {
        debug!(target: "composer", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Field::InsertChar('x')`
/// - `Tag::Add("rust")`
/// - `App::Resize(1920, 1080)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Compose(m) => format!("Compose::{:?}", m),
        Msg::Tag(m) => format!("Tag::{:?}", m),
        Msg::Field(m) => format!("Field::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
