//! Keyboard input handling
//!
//! Maps winit key events to messages. Shortcuts accept either Ctrl or the
//! platform "logo" key (Cmd on macOS) as the command modifier.

use winit::keyboard::{Key, ModifiersState, NamedKey};

use chirp::commands::Cmd;
use chirp::editable::MoveTarget;
use chirp::messages::{AppMsg, FieldMsg, Msg, UiMsg};
use chirp::model::{AppModel, FocusTarget};
use chirp::update::update;

/// Handle a key press
pub fn handle_key(model: &mut AppModel, key: &Key, modifiers: ModifiersState) -> Option<Cmd> {
    let msg = key_to_msg(key, modifiers)?;
    update(model, msg)
}

/// Translate a key press into a message, or None if the key is unbound
pub fn key_to_msg(key: &Key, modifiers: ModifiersState) -> Option<Msg> {
    let ctrl = modifiers.control_key();
    let alt = modifiers.alt_key();
    let logo = modifiers.super_key();
    let shift = modifiers.shift_key();
    let command = ctrl || logo;

    let msg = match key {
        // Shortcuts
        Key::Named(NamedKey::Enter) if command => Msg::App(AppMsg::Export),
        Key::Character(s) if command && s.eq_ignore_ascii_case("v") => Msg::App(AppMsg::Paste),
        Key::Character(s) if command && s.eq_ignore_ascii_case("q") => Msg::App(AppMsg::Quit),
        Key::Named(NamedKey::Escape) => Msg::Ui(UiMsg::Focus(FocusTarget::None)),
        Key::Named(NamedKey::Tab) if shift => Msg::Ui(UiMsg::FocusPrev),
        Key::Named(NamedKey::Tab) => Msg::Ui(UiMsg::FocusNext),

        // Editing
        Key::Named(NamedKey::Enter) => Msg::Field(FieldMsg::InsertNewline),
        Key::Named(NamedKey::Backspace) if alt || ctrl => Msg::Field(FieldMsg::DeleteWordBackward),
        Key::Named(NamedKey::Backspace) => Msg::Field(FieldMsg::DeleteBackward),
        Key::Named(NamedKey::Delete) => Msg::Field(FieldMsg::DeleteForward),

        // Navigation
        Key::Named(NamedKey::ArrowLeft) if logo => Msg::move_cursor(MoveTarget::LineStart),
        Key::Named(NamedKey::ArrowRight) if logo => Msg::move_cursor(MoveTarget::LineEnd),
        Key::Named(NamedKey::ArrowLeft) if alt || ctrl => Msg::move_cursor(MoveTarget::WordLeft),
        Key::Named(NamedKey::ArrowRight) if alt || ctrl => Msg::move_cursor(MoveTarget::WordRight),
        Key::Named(NamedKey::ArrowLeft) => Msg::move_cursor(MoveTarget::Left),
        Key::Named(NamedKey::ArrowRight) => Msg::move_cursor(MoveTarget::Right),
        Key::Named(NamedKey::ArrowUp) if logo => Msg::move_cursor(MoveTarget::Start),
        Key::Named(NamedKey::ArrowDown) if logo => Msg::move_cursor(MoveTarget::End),
        Key::Named(NamedKey::ArrowUp) => Msg::move_cursor(MoveTarget::Up),
        Key::Named(NamedKey::ArrowDown) => Msg::move_cursor(MoveTarget::Down),
        Key::Named(NamedKey::Home) if ctrl => Msg::move_cursor(MoveTarget::Start),
        Key::Named(NamedKey::End) if ctrl => Msg::move_cursor(MoveTarget::End),
        Key::Named(NamedKey::Home) => Msg::move_cursor(MoveTarget::LineStart),
        Key::Named(NamedKey::End) => Msg::move_cursor(MoveTarget::LineEnd),

        // Character input
        Key::Named(NamedKey::Space) if !command => Msg::insert_char(' '),
        Key::Character(s) if !command => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Msg::insert_char(ch),
                // Dead-key compositions and IME commits can yield several chars
                (Some(_), Some(_)) => Msg::Field(FieldMsg::InsertText(s.to_string())),
                (None, _) => return None,
            }
        }

        _ => return None,
    };
    Some(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ch(s: &str) -> Key {
        Key::Character(s.into())
    }

    #[test]
    fn test_plain_characters_insert() {
        assert_eq!(
            key_to_msg(&ch("a"), ModifiersState::empty()),
            Some(Msg::insert_char('a'))
        );
        assert_eq!(
            key_to_msg(&Key::Named(NamedKey::Space), ModifiersState::empty()),
            Some(Msg::insert_char(' '))
        );
    }

    #[test]
    fn test_command_shortcuts() {
        assert_eq!(
            key_to_msg(&ch("v"), ModifiersState::CONTROL),
            Some(Msg::App(AppMsg::Paste))
        );
        assert_eq!(
            key_to_msg(&ch("V"), ModifiersState::SUPER),
            Some(Msg::App(AppMsg::Paste))
        );
        assert_eq!(
            key_to_msg(&Key::Named(NamedKey::Enter), ModifiersState::CONTROL),
            Some(Msg::App(AppMsg::Export))
        );
        assert_eq!(key_to_msg(&ch("x"), ModifiersState::CONTROL), None);
    }

    #[test]
    fn test_word_navigation() {
        assert_eq!(
            key_to_msg(&Key::Named(NamedKey::ArrowLeft), ModifiersState::ALT),
            Some(Msg::move_cursor(MoveTarget::WordLeft))
        );
        assert_eq!(
            key_to_msg(&Key::Named(NamedKey::Backspace), ModifiersState::ALT),
            Some(Msg::Field(FieldMsg::DeleteWordBackward))
        );
    }

    #[test]
    fn test_tab_cycles_focus() {
        assert_eq!(
            key_to_msg(&Key::Named(NamedKey::Tab), ModifiersState::SHIFT),
            Some(Msg::Ui(UiMsg::FocusPrev))
        );
    }

    #[test]
    fn test_composed_text_is_inserted_whole() {
        assert_eq!(
            key_to_msg(&ch("❤️"), ModifiersState::empty()),
            Some(Msg::Field(FieldMsg::InsertText("❤️".to_string())))
        );
    }
}
