//! Form layout and hit-testing
//!
//! Pure geometry: every widget rect is computed from the window size, the
//! font metrics and the current composer state. The renderer draws from a
//! `FormLayout` and the runtime hit-tests mouse events against the same
//! value, so the two can never disagree.
//!
//! Text is laid out on a monospace grid of `char_width` x `line_height`.

use crate::editable::{Position, TextField};
use crate::model::{AppModel, Composer};

/// Visible lines in the message field
pub const MESSAGE_VISIBLE_LINES: usize = 6;
/// Preview box grows between these line counts
pub const PREVIEW_MIN_LINES: usize = 2;
pub const PREVIEW_MAX_LINES: usize = 8;

pub const ADD_TAG_LABEL: &str = "Add";
pub const EXPORT_LABEL: &str = "Copy to clipboard";
/// Glyph drawn at the end of each chip
pub const CHIP_REMOVE_GLYPH: &str = "×";

/// Axis-aligned rectangle in physical pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: f32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            (self.width - 2.0 * amount).max(0.0),
            (self.height - 2.0 * amount).max(0.0),
        )
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// A widget the pointer can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitTarget {
    MessageField,
    EmojiButton(usize),
    TagInput,
    AddTagButton,
    /// Chip body (not clickable, but hoverable)
    Chip(usize),
    /// The `×` on a chip
    ChipRemove(usize),
    Preview,
    ExportButton,
}

/// Font metrics and window size the layout is computed from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub window_width: f32,
    pub window_height: f32,
    pub char_width: f32,
    pub line_height: f32,
}

impl LayoutMetrics {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            window_width: model.window_size.0 as f32,
            window_height: model.window_size.1 as f32,
            char_width: model.char_width.max(1.0),
            line_height: (model.line_height as f32).max(1.0),
        }
    }

    /// Outer margin of the form
    pub fn padding(&self) -> f32 {
        (self.line_height * 0.75).round()
    }

    /// Vertical gap between rows
    pub fn gap(&self) -> f32 {
        (self.line_height * 0.5).round()
    }

    /// Inner padding of fields and buttons
    pub fn field_padding(&self) -> f32 {
        (self.line_height * 0.4).round()
    }

    pub fn button_height(&self) -> f32 {
        self.line_height + 2.0 * self.field_padding()
    }

    /// Width of a button whose label is `label`
    pub fn button_width(&self, label: &str) -> f32 {
        (label.chars().count() + 2) as f32 * self.char_width + 2.0 * self.field_padding()
    }
}

/// A tag chip: the whole pill and its remove hotspot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChipLayout {
    pub rect: Rect,
    pub remove: Rect,
}

/// Geometry of the whole form
#[derive(Debug, Clone, PartialEq)]
pub struct FormLayout {
    pub metrics: LayoutMetrics,
    /// "Compose" heading row
    pub title: Rect,
    /// Remaining-budget counter, right side of the heading row
    pub counter: Rect,
    pub message: Rect,
    /// Text area inside the message field
    pub message_text: Rect,
    pub emojis: Vec<Rect>,
    pub tag_input: Rect,
    pub tag_input_text: Rect,
    pub add_button: Rect,
    pub chips: Vec<ChipLayout>,
    pub preview_label: Rect,
    pub preview: Rect,
    /// Preview text already wrapped to the preview width
    pub preview_lines: Vec<String>,
    /// Space left of the export button for the "why disabled" hint
    pub export_hint: Rect,
    pub export_button: Rect,
    /// Banner along the bottom edge
    pub notification: Rect,
}

impl FormLayout {
    pub fn compute(model: &AppModel) -> Self {
        Self::compute_with(
            LayoutMetrics::from_model(model),
            model.emojis(),
            &model.composer,
        )
    }

    pub fn compute_with(metrics: LayoutMetrics, emojis: &[String], composer: &Composer) -> Self {
        let m = metrics;
        let pad = m.padding();
        let gap = m.gap();
        let fpad = m.field_padding();
        let lh = m.line_height;
        let cw = m.char_width;
        let content_w = (m.window_width - 2.0 * pad).max(cw * 8.0);
        let left = pad;
        let right = left + content_w;
        let mut y = pad;

        // Heading + counter
        let counter_w = (cw * 24.0).min(content_w / 2.0);
        let title = Rect::new(left, y, content_w - counter_w, lh);
        let counter = Rect::new(right - counter_w, y, counter_w, lh);
        y += lh + gap;

        // Message field
        let message = Rect::new(
            left,
            y,
            content_w,
            MESSAGE_VISIBLE_LINES as f32 * lh + 2.0 * fpad,
        );
        let message_text = message.inset(fpad);
        y = message.bottom() + gap;

        // Emoji buttons (flow, wrapping)
        let button_h = m.button_height();
        let emoji_w = 2.0 * cw + 2.0 * fpad;
        let mut emoji_rects = Vec::with_capacity(emojis.len());
        let mut x = left;
        for _ in emojis {
            if x > left && x + emoji_w > right {
                x = left;
                y += button_h + gap / 2.0;
            }
            emoji_rects.push(Rect::new(x, y, emoji_w, button_h));
            x += emoji_w + gap / 2.0;
        }
        if !emoji_rects.is_empty() {
            y += button_h + gap;
        }

        // Tag input + Add button
        let add_w = m.button_width(ADD_TAG_LABEL);
        let input_w = (content_w - add_w - gap).max(cw * 4.0);
        let tag_input = Rect::new(left, y, input_w, button_h);
        let tag_input_text = tag_input.inset(fpad);
        let add_button = Rect::new(left + input_w + gap, y, add_w, button_h);
        y += button_h + gap;

        // Chips (flow, wrapping)
        let chip_h = lh + fpad;
        let mut chips = Vec::with_capacity(composer.tags.len());
        let mut x = left;
        for tag in composer.tags.iter() {
            // "#tag" + " ×"
            let cols = tag.chars().count() + 1 + 2;
            let chip_w = (cols as f32 * cw + 2.0 * fpad).min(content_w);
            if x > left && x + chip_w > right {
                x = left;
                y += chip_h + gap / 2.0;
            }
            let rect = Rect::new(x, y, chip_w, chip_h);
            let remove_w = 2.0 * cw + fpad;
            let remove = Rect::new(rect.right() - remove_w, y, remove_w, chip_h);
            chips.push(ChipLayout { rect, remove });
            x += chip_w + gap / 2.0;
        }
        if !chips.is_empty() {
            y += chip_h + gap;
        }

        // Preview
        let preview_label = Rect::new(left, y, content_w, lh);
        y += lh + gap / 2.0;
        let preview_cols = (((content_w - 2.0 * fpad) / cw).floor() as usize).max(1);
        let preview_lines = wrap_text(&composer.preview(), preview_cols);
        let shown = preview_lines
            .len()
            .clamp(PREVIEW_MIN_LINES, PREVIEW_MAX_LINES);
        let preview = Rect::new(left, y, content_w, shown as f32 * lh + 2.0 * fpad);
        y = preview.bottom() + gap;

        // Export row
        let export_w = m.button_width(EXPORT_LABEL).min(content_w);
        let export_button = Rect::new(right - export_w, y, export_w, button_h);
        let export_hint = Rect::new(left, y, (content_w - export_w - gap).max(0.0), button_h);

        let notification_h = lh + 2.0 * fpad;
        let notification = Rect::new(
            0.0,
            (m.window_height - notification_h).max(0.0),
            m.window_width,
            notification_h,
        );

        Self {
            metrics,
            title,
            counter,
            message,
            message_text,
            emojis: emoji_rects,
            tag_input,
            tag_input_text,
            add_button,
            chips,
            preview_label,
            preview,
            preview_lines,
            export_hint,
            export_button,
            notification,
        }
    }

    /// Find the widget under a point. Chip remove hotspots win over the
    /// chip body.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<HitTarget> {
        if self.message.contains(x, y) {
            return Some(HitTarget::MessageField);
        }
        if let Some(i) = self.emojis.iter().position(|r| r.contains(x, y)) {
            return Some(HitTarget::EmojiButton(i));
        }
        if self.tag_input.contains(x, y) {
            return Some(HitTarget::TagInput);
        }
        if self.add_button.contains(x, y) {
            return Some(HitTarget::AddTagButton);
        }
        for (i, chip) in self.chips.iter().enumerate() {
            if chip.remove.contains(x, y) {
                return Some(HitTarget::ChipRemove(i));
            }
            if chip.rect.contains(x, y) {
                return Some(HitTarget::Chip(i));
            }
        }
        if self.preview.contains(x, y) {
            return Some(HitTarget::Preview);
        }
        if self.export_button.contains(x, y) {
            return Some(HitTarget::ExportButton);
        }
        None
    }

    /// Visible columns in the message field
    pub fn message_columns(&self) -> usize {
        columns_in(self.message_text, self.metrics.char_width)
    }

    /// Visible columns in the tag input
    pub fn tag_input_columns(&self) -> usize {
        columns_in(self.tag_input_text, self.metrics.char_width)
    }

    /// Caret position for a click inside the message field
    pub fn message_position_at(&self, field: &TextField, x: f32, y: f32) -> Position {
        let scroll = FieldScroll::for_field(field, MESSAGE_VISIBLE_LINES, self.message_columns());
        position_at(self.message_text, self.metrics, scroll, x, y)
    }

    /// Caret position for a click inside the tag input
    pub fn tag_input_position_at(&self, field: &TextField, x: f32, y: f32) -> Position {
        let scroll = FieldScroll::for_field(field, 1, self.tag_input_columns());
        position_at(self.tag_input_text, self.metrics, scroll, x, y)
    }
}

fn columns_in(rect: Rect, char_width: f32) -> usize {
    ((rect.width / char_width).floor() as usize).max(1)
}

fn position_at(text: Rect, m: LayoutMetrics, scroll: FieldScroll, x: f32, y: f32) -> Position {
    let rel_x = (x - text.x).max(0.0);
    let rel_y = (y - text.y).max(0.0);
    let column = (rel_x / m.char_width).round() as usize + scroll.left;
    let line = (rel_y / m.line_height).floor() as usize + scroll.top;
    Position::new(line, column)
}

/// Scroll offsets of a field, derived from the caret so it is always visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldScroll {
    /// First visible line
    pub top: usize,
    /// First visible column
    pub left: usize,
}

impl FieldScroll {
    pub fn for_field(field: &TextField, visible_lines: usize, visible_columns: usize) -> Self {
        let pos = field.position();
        Self {
            top: pos.line.saturating_sub(visible_lines.saturating_sub(1)),
            left: pos.column.saturating_sub(visible_columns.saturating_sub(1)),
        }
    }
}

/// Word-wrap text to `columns` chars per line. Hard line breaks are kept;
/// words longer than a line are split.
pub fn wrap_text(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut out = Vec::new();
    for hard_line in text.split('\n') {
        let mut rest: Vec<char> = hard_line.chars().collect();
        while rest.len() > columns {
            let window = &rest[..=columns];
            let (line_end, next_start) = match window.iter().rposition(|c| *c == ' ') {
                Some(space) if space > 0 => (space, space + 1),
                _ => (columns, columns),
            };
            out.push(rest[..line_end].iter().collect());
            rest.drain(..next_start);
        }
        out.push(rest.into_iter().collect());
    }
    out
}
