//! Text field rendering.
//!
//! Draws the visible window of a `TextField` (text, placeholder and caret)
//! inside a text rect. Scroll offsets come from `FieldScroll`, the same
//! value the layout uses for click-to-caret, so both always agree.

use chirp::editable::TextField;
use chirp::layout::{FieldScroll, Rect};

use super::frame::{Frame, TextPainter};

/// Options for rendering a text field.
#[derive(Debug, Clone)]
pub struct TextFieldOptions<'a> {
    /// Area the text is drawn in (inside the field's padding)
    pub rect: Rect,
    /// Number of lines that fit in `rect`
    pub visible_lines: usize,
    /// Number of columns that fit in `rect`
    pub visible_columns: usize,
    /// Text foreground color
    pub text_color: u32,
    /// Shown while the field is empty
    pub placeholder: Option<&'a str>,
    pub placeholder_color: u32,
    /// Cursor color
    pub cursor_color: u32,
    /// Whether cursor should be drawn (focus and blink phase)
    pub cursor_visible: bool,
}

pub struct TextFieldRenderer;

impl TextFieldRenderer {
    pub fn render(
        frame: &mut Frame,
        painter: &mut TextPainter,
        field: &TextField,
        opts: &TextFieldOptions,
    ) {
        let x = opts.rect.x.round() as usize;
        let y = opts.rect.y.round() as usize;
        let char_width = painter.char_width();
        let line_height = painter.line_height();

        frame.set_clip(opts.rect);

        if field.is_empty() {
            if let Some(placeholder) = opts.placeholder {
                painter.draw(frame, x, y, placeholder, opts.placeholder_color);
            }
        } else {
            let scroll = FieldScroll::for_field(field, opts.visible_lines, opts.visible_columns);
            let last = (scroll.top + opts.visible_lines).min(field.line_count());
            for (row, line_idx) in (scroll.top..last).enumerate() {
                let Some(line) = field.line(line_idx) else {
                    continue;
                };
                let visible: String = line
                    .chars()
                    .skip(scroll.left)
                    .take(opts.visible_columns + 1)
                    .collect();
                painter.draw(frame, x, y + row * line_height, &visible, opts.text_color);
            }
        }

        if opts.cursor_visible {
            let scroll = FieldScroll::for_field(field, opts.visible_lines, opts.visible_columns);
            let pos = field.position();
            let row = pos.line.saturating_sub(scroll.top);
            let col = pos.column.saturating_sub(scroll.left);
            let cursor_x = x + (col as f32 * char_width).round() as usize;
            let cursor_y = y + row * line_height;
            // 2px wide cursor bar
            frame.fill_rect_px(
                cursor_x,
                cursor_y + 1,
                2,
                line_height.saturating_sub(2),
                opts.cursor_color,
            );
        }

        frame.clear_clip();
    }
}
