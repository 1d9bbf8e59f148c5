//! Button rendering primitives
//!
//! Provides a simple, pure-function API for rendering themed buttons.
//! No widget tree or stored state: callers determine visual state
//! from the model and pass it to the render function.

use chirp::layout::Rect;
use chirp::theme::Theme;

use super::frame::{Frame, TextPainter};

/// Visual state of a button, determined by the caller from UI interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Default idle state
    #[default]
    Normal,
    /// Mouse is hovering over the button
    Hovered,
    /// The action is currently unavailable
    Disabled,
}

impl ButtonState {
    pub fn from_flags(hovered: bool, enabled: bool) -> Self {
        match (enabled, hovered) {
            (false, _) => ButtonState::Disabled,
            (true, true) => ButtonState::Hovered,
            (true, false) => ButtonState::Normal,
        }
    }
}

/// Render a button with centered text label
pub fn render_button(
    frame: &mut Frame,
    painter: &mut TextPainter,
    theme: &Theme,
    rect: Rect,
    label: &str,
    state: ButtonState,
) {
    let btn = &theme.button;

    let (bg, fg) = match state {
        ButtonState::Normal => (btn.background, btn.foreground),
        ButtonState::Hovered => (btn.background_hover, btn.foreground),
        ButtonState::Disabled => (btn.disabled_background, btn.disabled_foreground),
    };
    let bg = bg.to_argb_u32();
    let border = theme.field.border.to_argb_u32();

    frame.draw_bordered_rect(rect, bg, border);

    let x = rect.x.round() as usize;
    let y = rect.y.round() as usize;
    let w = rect.width.round() as usize;
    let h = rect.height.round() as usize;

    let text_w = (label.chars().count() as f32 * painter.char_width()).round() as usize;
    let text_x = x + w.saturating_sub(text_w) / 2;
    let text_y = y + h.saturating_sub(painter.line_height()) / 2;
    painter.draw(frame, text_x, text_y, label, fg.to_argb_u32());
}
