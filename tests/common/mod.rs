//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use chirp::config::ComposerConfig;
use chirp::model::AppModel;
use chirp::theme::Theme;

/// Create a test model with default config, default theme and fixed
/// metrics (10px columns, 20px lines, 800x600 window)
pub fn test_model() -> AppModel {
    AppModel::with_config(800, 600, ComposerConfig::default(), Theme::default())
}

/// Create a test model with the given message already typed
pub fn test_model_with_message(message: &str) -> AppModel {
    let mut model = test_model();
    model.composer.set_message(message);
    model
}

/// Create a test model with a message and tags
pub fn test_model_with(message: &str, tags: &[&str]) -> AppModel {
    let mut model = test_model_with_message(message);
    for tag in tags {
        model.composer.add_tag(tag);
    }
    model
}

/// Center point of a rect, for simulated clicks
pub fn center(rect: chirp::layout::Rect) -> (f64, f64) {
    (
        (rect.x + rect.width / 2.0) as f64,
        (rect.y + rect.height / 2.0) as f64,
    )
}
