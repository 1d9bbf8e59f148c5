//! View module - software rendering of the composer window
//!
//! The renderer redraws the whole form into a back buffer from the current
//! `FormLayout`, then copies it to the softbuffer surface.

pub mod button;
pub mod fonts;
pub mod frame;
pub mod text_field;

pub use frame::{Frame, TextPainter};

use anyhow::{anyhow, Result};
use fontdue::{LineMetrics, Metrics};
use softbuffer::Surface;
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::window::Window;

use chirp::config::ComposerConfig;
use chirp::layout::{
    FormLayout, HitTarget, Rect, ADD_TAG_LABEL, CHIP_REMOVE_GLYPH, EXPORT_LABEL,
    MESSAGE_VISIBLE_LINES,
};
use chirp::model::{AppModel, ExportBlock, FocusTarget, NotificationKind};

use button::{render_button, ButtonState};
use fonts::FontSet;
use text_field::{TextFieldOptions, TextFieldRenderer};

pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

const TITLE: &str = "Compose";
const PREVIEW_LABEL: &str = "Preview";
const MESSAGE_PLACEHOLDER: &str = "What's happening?";
const TAG_PLACEHOLDER: &str = "Add a hashtag";
/// Counter switches to the warning color at or below this many characters
const COUNTER_WARNING_AT: i64 = 20;

pub struct Renderer {
    fonts: FontSet,
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Softbuffer doesn't guarantee buffer contents are preserved between
    /// frames, so we draw into our own buffer and copy on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
    font_size: f32,
    line_metrics: LineMetrics,
    glyph_cache: GlyphCache,
    char_width: f32,
    scale_factor: f64,
}

impl Renderer {
    /// Create a new renderer, automatically detecting the window's scale factor
    pub fn new(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        config: &ComposerConfig,
    ) -> Result<Self> {
        let scale_factor = window.scale_factor();
        Self::with_scale_factor(window, context, config, scale_factor)
    }

    /// Create a new renderer with an explicit scale factor
    pub fn with_scale_factor(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        config: &ComposerConfig,
        scale_factor: f64,
    ) -> Result<Self> {
        let (width, height) = {
            let size = window.inner_size();
            (size.width.max(1), size.height.max(1))
        };

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create surface: {}", e))?;
        resize_surface(&mut surface, width, height)?;

        let fonts = FontSet::load(&config.fonts)?;
        tracing::info!("Loaded {} font(s)", fonts.len());

        let font_size = config.font_size * scale_factor as f32;
        let line_metrics = fonts
            .primary()
            .horizontal_line_metrics(font_size)
            .ok_or_else(|| anyhow!("Font missing horizontal line metrics"))?;
        let char_width = fonts.primary().metrics('M', font_size).advance_width;

        let back_buffer = vec![0u32; (width as usize) * (height as usize)];

        Ok(Self {
            fonts,
            surface,
            back_buffer,
            width,
            height,
            font_size,
            line_metrics,
            glyph_cache: HashMap::new(),
            char_width,
            scale_factor,
        })
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    pub fn line_height(&self) -> usize {
        self.line_metrics.new_line_size.ceil() as usize
    }

    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let (w, h) = (model.window_size.0.max(1), model.window_size.1.max(1));
        if self.width != w || self.height != h {
            self.width = w;
            self.height = h;
            self.back_buffer
                .resize((w as usize) * (h as usize), 0);
            resize_surface(&mut self.surface, w, h)?;
        }

        let layout = model.layout();
        {
            let mut frame = Frame::new(
                &mut self.back_buffer,
                self.width as usize,
                self.height as usize,
            );
            let mut painter = TextPainter::new(
                &self.fonts,
                &mut self.glyph_cache,
                self.font_size,
                self.line_metrics.ascent,
                self.char_width,
                self.line_metrics.new_line_size.ceil() as usize,
            );
            draw_form(&mut frame, &mut painter, model, &layout);
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to get surface buffer: {}", e))?;
        buffer.copy_from_slice(&self.back_buffer);
        buffer
            .present()
            .map_err(|e| anyhow!("Failed to present buffer: {}", e))?;

        Ok(())
    }
}

fn resize_surface(
    surface: &mut Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
        return Err(anyhow!("Surface size must be non-zero ({}x{})", width, height));
    };
    surface
        .resize(w, h)
        .map_err(|e| anyhow!("Failed to resize surface: {}", e))
}

fn draw_form(frame: &mut Frame, painter: &mut TextPainter, model: &AppModel, layout: &FormLayout) {
    let theme = &model.theme;
    let composer = &model.composer;
    let hovered = model.ui.hovered;
    let cw = painter.char_width();

    frame.clear(theme.window.background.to_argb_u32());

    // Heading and remaining-budget counter
    painter.draw(
        frame,
        px(layout.title.x),
        px(layout.title.y),
        TITLE,
        theme.window.foreground.to_argb_u32(),
    );
    let (counter_text, counter_color) = counter_label(model);
    let counter_w = counter_text.chars().count() as f32 * cw;
    painter.draw(
        frame,
        px(layout.counter.right() - counter_w),
        px(layout.counter.y),
        &counter_text,
        counter_color,
    );

    // Message
    let message_focused = model.ui.focus == FocusTarget::Message;
    draw_field_box(frame, model, layout.message, message_border(model, message_focused));
    TextFieldRenderer::render(
        frame,
        painter,
        &composer.message,
        &TextFieldOptions {
            rect: layout.message_text,
            visible_lines: MESSAGE_VISIBLE_LINES,
            visible_columns: layout.message_columns(),
            text_color: theme.field.foreground.to_argb_u32(),
            placeholder: Some(MESSAGE_PLACEHOLDER),
            placeholder_color: theme.field.placeholder.to_argb_u32(),
            cursor_color: theme.field.cursor.to_argb_u32(),
            cursor_visible: message_focused && model.ui.cursor_visible,
        },
    );

    // Emoji palette
    for (i, (rect, emoji)) in layout.emojis.iter().zip(model.emojis()).enumerate() {
        let state = ButtonState::from_flags(hovered == Some(HitTarget::EmojiButton(i)), true);
        render_button(frame, painter, theme, *rect, emoji, state);
    }

    // Tag input and Add button
    let tag_focused = model.ui.focus == FocusTarget::TagDraft;
    draw_field_box(frame, model, layout.tag_input, field_border(model, tag_focused));
    TextFieldRenderer::render(
        frame,
        painter,
        &composer.tag_draft,
        &TextFieldOptions {
            rect: layout.tag_input_text,
            visible_lines: 1,
            visible_columns: layout.tag_input_columns(),
            text_color: theme.field.foreground.to_argb_u32(),
            placeholder: Some(TAG_PLACEHOLDER),
            placeholder_color: theme.field.placeholder.to_argb_u32(),
            cursor_color: theme.field.cursor.to_argb_u32(),
            cursor_visible: tag_focused && model.ui.cursor_visible,
        },
    );
    let add_state = ButtonState::from_flags(
        hovered == Some(HitTarget::AddTagButton),
        !composer.tag_draft.is_empty(),
    );
    render_button(frame, painter, theme, layout.add_button, ADD_TAG_LABEL, add_state);

    // Chips
    let fpad = layout.metrics.field_padding();
    for (i, (chip, tag)) in layout.chips.iter().zip(composer.tags.iter()).enumerate() {
        let bg = if hovered == Some(HitTarget::Chip(i)) || hovered == Some(HitTarget::ChipRemove(i))
        {
            theme.button.background_hover
        } else {
            theme.chip.background
        };
        frame.fill_rect(chip.rect, bg.to_argb_u32());
        frame.set_clip(chip.rect);
        let text_y = px(chip.rect.y + fpad / 2.0);
        painter.draw(
            frame,
            px(chip.rect.x + fpad),
            text_y,
            &format!("#{}", tag),
            theme.chip.foreground.to_argb_u32(),
        );
        let remove_color = if hovered == Some(HitTarget::ChipRemove(i)) {
            theme.counter.over_limit
        } else {
            theme.chip.remove
        };
        painter.draw(
            frame,
            px(chip.remove.x + cw / 2.0),
            text_y,
            CHIP_REMOVE_GLYPH,
            remove_color.to_argb_u32(),
        );
        frame.clear_clip();
    }

    // Preview
    painter.draw(
        frame,
        px(layout.preview_label.x),
        px(layout.preview_label.y),
        PREVIEW_LABEL,
        theme.window.muted.to_argb_u32(),
    );
    frame.draw_bordered_rect(
        layout.preview,
        theme.field.background.to_argb_u32(),
        theme.field.border.to_argb_u32(),
    );
    let preview_color = if composer.composed().is_empty() {
        theme.field.placeholder
    } else {
        theme.field.foreground
    };
    let preview_text = layout.preview.inset(fpad);
    frame.set_clip(preview_text);
    let line_height = painter.line_height();
    for (i, line) in layout.preview_lines.iter().enumerate() {
        painter.draw(
            frame,
            px(preview_text.x),
            px(preview_text.y) + i * line_height,
            line,
            preview_color.to_argb_u32(),
        );
    }
    frame.clear_clip();

    // Export row
    let block = composer.export_block();
    if let Some(block) = block {
        let hint_color = match block {
            ExportBlock::OverLimit { .. } => theme.counter.over_limit,
            ExportBlock::EmptyMessage => theme.window.muted,
        };
        frame.set_clip(layout.export_hint);
        painter.draw(
            frame,
            px(layout.export_hint.x),
            px(layout.export_hint.y + (layout.export_hint.height - line_height as f32) / 2.0),
            &export_hint(block),
            hint_color.to_argb_u32(),
        );
        frame.clear_clip();
    }
    let export_state = ButtonState::from_flags(
        hovered == Some(HitTarget::ExportButton),
        block.is_none(),
    );
    render_button(
        frame,
        painter,
        theme,
        layout.export_button,
        EXPORT_LABEL,
        export_state,
    );

    // Notification banner
    if let Some(notification) = &model.ui.notification {
        let bg = match notification.kind {
            NotificationKind::Info => theme.notification.info_background,
            NotificationKind::Error => theme.notification.error_background,
        };
        frame.fill_rect(layout.notification, bg.to_argb_u32());
        painter.draw(
            frame,
            px(layout.notification.x + layout.metrics.padding()),
            px(layout.notification.y + fpad),
            &notification.text,
            theme.notification.foreground.to_argb_u32(),
        );
    }
}

fn draw_field_box(frame: &mut Frame, model: &AppModel, rect: Rect, border: u32) {
    frame.draw_bordered_rect(rect, model.theme.field.background.to_argb_u32(), border);
}

fn field_border(model: &AppModel, focused: bool) -> u32 {
    let field = &model.theme.field;
    let border = if focused {
        field.border_focused
    } else {
        field.border
    };
    border.to_argb_u32()
}

/// The message box turns the over-limit color once the budget is exceeded
fn message_border(model: &AppModel, focused: bool) -> u32 {
    if model.composer.is_over_limit() {
        model.theme.counter.over_limit.to_argb_u32()
    } else {
        field_border(model, focused)
    }
}

/// Counter text and color for the current remaining budget
fn counter_label(model: &AppModel) -> (String, u32) {
    let remaining = model.composer.remaining();
    let counter = &model.theme.counter;
    if remaining < 0 {
        (
            format!("{} (over limit by {})", remaining, -remaining),
            counter.over_limit.to_argb_u32(),
        )
    } else if remaining <= COUNTER_WARNING_AT {
        (format!("{} left", remaining), counter.warning.to_argb_u32())
    } else {
        (format!("{} left", remaining), counter.normal.to_argb_u32())
    }
}

fn export_hint(block: ExportBlock) -> String {
    match block {
        ExportBlock::EmptyMessage => "Write a message to enable copying".to_string(),
        ExportBlock::OverLimit { over } => {
            format!("Remove {} character(s) to enable copying", over)
        }
    }
}

#[inline]
fn px(v: f32) -> usize {
    v.max(0.0).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_hint_names_overage() {
        assert_eq!(
            export_hint(ExportBlock::OverLimit { over: 3 }),
            "Remove 3 character(s) to enable copying"
        );
    }

    #[test]
    fn test_counter_label_thresholds() {
        let mut model = AppModel::with_config(
            800,
            600,
            ComposerConfig::default(),
            chirp::theme::Theme::default(),
        );
        let (text, color) = counter_label(&model);
        assert_eq!(text, "280 left");
        assert_eq!(color, model.theme.counter.normal.to_argb_u32());

        model.composer.set_message("a".repeat(265));
        let (text, color) = counter_label(&model);
        assert_eq!(text, "15 left");
        assert_eq!(color, model.theme.counter.warning.to_argb_u32());

        model.composer.set_message("a".repeat(283));
        let (text, color) = counter_label(&model);
        assert_eq!(text, "-3 (over limit by 3)");
        assert_eq!(color, model.theme.counter.over_limit.to_argb_u32());
    }

    #[test]
    fn test_message_border_turns_red_over_limit() {
        let mut model = AppModel::with_config(
            800,
            600,
            ComposerConfig::default(),
            chirp::theme::Theme::default(),
        );
        let field = model.theme.field.clone();
        let over = model.theme.counter.over_limit.to_argb_u32();

        model.composer.set_message("a".repeat(280));
        assert_eq!(message_border(&model, false), field.border.to_argb_u32());
        assert_eq!(
            message_border(&model, true),
            field.border_focused.to_argb_u32()
        );

        model.composer.set_message("😊".repeat(141));
        assert_eq!(message_border(&model, false), over);
        assert_eq!(message_border(&model, true), over);
        // Tag input keeps its focus colors
        assert_eq!(field_border(&model, false), field.border.to_argb_u32());
    }
}
