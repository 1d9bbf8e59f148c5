//! Form layout and hit-testing

mod common;

use chirp::editable::Position;
use chirp::layout::{FormLayout, HitTarget, LayoutMetrics, PREVIEW_MAX_LINES, PREVIEW_MIN_LINES};
use chirp::model::PREVIEW_PLACEHOLDER;
use common::{center, test_model, test_model_with};

#[test]
fn test_rows_are_stacked_top_to_bottom() {
    let model = test_model_with("hi", &["rust"]);
    let layout = model.layout();

    assert!(layout.title.bottom() <= layout.message.y);
    assert!(layout.message.bottom() <= layout.emojis[0].y);
    assert!(layout.emojis[0].bottom() <= layout.tag_input.y);
    assert!(layout.tag_input.bottom() <= layout.chips[0].rect.y);
    assert!(layout.chips[0].rect.bottom() <= layout.preview.y);
    assert!(layout.preview.bottom() <= layout.export_button.y);
}

#[test]
fn test_one_rect_per_emoji_and_tag() {
    let model = test_model_with("hi", &["a", "b", "c"]);
    let layout = model.layout();
    assert_eq!(layout.emojis.len(), model.emojis().len());
    assert_eq!(layout.chips.len(), 3);
}

#[test]
fn test_emoji_buttons_wrap_in_narrow_window() {
    let mut model = test_model();
    model.window_size = (160, 600);
    let layout = model.layout();
    let first_row = layout.emojis[0].y;
    assert!(layout.emojis.iter().any(|r| r.y > first_row));
    for rect in &layout.emojis {
        assert!(rect.right() <= 160.0, "{:?} overflows", rect);
    }
}

#[test]
fn test_hit_test_finds_each_widget() {
    let model = test_model_with("hi", &["rust"]);
    let layout = model.layout();

    let hit = |rect| {
        let (x, y) = center(rect);
        layout.hit_test(x as f32, y as f32)
    };

    assert_eq!(hit(layout.message), Some(HitTarget::MessageField));
    assert_eq!(hit(layout.emojis[2]), Some(HitTarget::EmojiButton(2)));
    assert_eq!(hit(layout.tag_input), Some(HitTarget::TagInput));
    assert_eq!(hit(layout.add_button), Some(HitTarget::AddTagButton));
    assert_eq!(hit(layout.chips[0].remove), Some(HitTarget::ChipRemove(0)));
    assert_eq!(hit(layout.preview), Some(HitTarget::Preview));
    assert_eq!(hit(layout.export_button), Some(HitTarget::ExportButton));
}

#[test]
fn test_chip_body_is_not_remove() {
    let model = test_model_with("hi", &["longer-tag"]);
    let layout = model.layout();
    let chip = layout.chips[0].rect;
    let hit = layout.hit_test(chip.x + 2.0, chip.y + chip.height / 2.0);
    assert_eq!(hit, Some(HitTarget::Chip(0)));
}

#[test]
fn test_hit_test_outside_everything() {
    let model = test_model();
    let layout = model.layout();
    assert_eq!(layout.hit_test(1.0, 1.0), None);
    assert_eq!(layout.hit_test(-5.0, -5.0), None);
}

#[test]
fn test_preview_shows_placeholder_when_empty() {
    let model = test_model();
    let layout = model.layout();
    assert_eq!(layout.preview_lines, vec![PREVIEW_PLACEHOLDER.to_string()]);
}

#[test]
fn test_preview_height_is_clamped() {
    let metrics = LayoutMetrics {
        window_width: 200.0,
        window_height: 600.0,
        char_width: 10.0,
        line_height: 20.0,
    };
    let fpad = metrics.field_padding();
    let mut composer = chirp::Composer::new();

    composer.set_message("short");
    let layout = FormLayout::compute_with(metrics, &[], &composer);
    let lines = ((layout.preview.height - 2.0 * fpad) / 20.0).round() as usize;
    assert_eq!(lines, PREVIEW_MIN_LINES);

    composer.set_message("word ".repeat(200));
    let layout = FormLayout::compute_with(metrics, &[], &composer);
    let lines = ((layout.preview.height - 2.0 * fpad) / 20.0).round() as usize;
    assert_eq!(lines, PREVIEW_MAX_LINES);
    assert!(layout.preview_lines.len() > PREVIEW_MAX_LINES);
}

#[test]
fn test_click_position_in_message_maps_to_grid() {
    let model = test_model_with("hello\nworld", &[]);
    let layout = model.layout();
    let text = layout.message_text;
    // Second line, third column
    let pos = layout.message_position_at(
        &model.composer.message,
        text.x + 3.0 * 10.0,
        text.y + 20.0 + 5.0,
    );
    assert_eq!(pos, Position::new(1, 3));
}
