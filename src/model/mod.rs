//! Application model - the complete state of the composer window
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod composer;
pub mod tags;
pub mod ui;

pub use composer::{
    compose, post_len, remaining_budget, ComposeSummary, Composer, ExportBlock, CHAR_LIMIT, DEFAULT_EMOJIS,
    PREVIEW_PLACEHOLDER,
};
pub use tags::TagSet;
pub use ui::{FocusTarget, Notification, NotificationKind, UiState, NOTIFICATION_DURATION};

use crate::config::ComposerConfig;
use crate::editable::TextField;
use crate::theme::{load_theme, Theme};

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Message, tags and tag draft
    pub composer: Composer,
    /// Focus, hover, notifications, cursor blink
    pub ui: UiState,
    /// Theme for colors and styling
    pub theme: Theme,
    /// Configuration read at startup
    pub config: ComposerConfig,
    /// Window dimensions in physical pixels
    pub window_size: (u32, u32),
    /// Line height in pixels
    pub line_height: usize,
    /// Character width in pixels (monospace grid)
    pub char_width: f32,
    /// DPI scale factor
    pub scale_factor: f64,
}

impl AppModel {
    /// Create a model, loading config and theme from the user config dir.
    /// `theme_override` takes precedence over the configured theme.
    pub fn new(window_width: u32, window_height: u32, theme_override: Option<&str>) -> Self {
        let config = ComposerConfig::load();
        let theme_id = theme_override.unwrap_or(&config.theme);
        let theme = load_theme(theme_id).unwrap_or_else(|e| {
            tracing::warn!("Failed to load theme '{}': {}, using default", theme_id, e);
            Theme::default()
        });
        Self::with_config(window_width, window_height, config, theme)
    }

    /// Create a model from already-loaded config and theme
    pub fn with_config(
        window_width: u32,
        window_height: u32,
        config: ComposerConfig,
        theme: Theme,
    ) -> Self {
        Self {
            composer: Composer::new(),
            ui: UiState::new(),
            theme,
            config,
            window_size: (window_width, window_height),
            // Corrected by the renderer with actual font metrics
            line_height: 20,
            char_width: 10.0,
            scale_factor: 1.0,
        }
    }

    /// Emoji palette in display order
    pub fn emojis(&self) -> &[String] {
        &self.config.emojis
    }

    /// The text field that currently has keyboard focus
    pub fn focused_field(&self) -> Option<&TextField> {
        match self.ui.focus {
            FocusTarget::Message => Some(&self.composer.message),
            FocusTarget::TagDraft => Some(&self.composer.tag_draft),
            FocusTarget::None => None,
        }
    }

    /// The text field that currently has keyboard focus (mutable)
    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.ui.focus {
            FocusTarget::Message => Some(&mut self.composer.message),
            FocusTarget::TagDraft => Some(&mut self.composer.tag_draft),
            FocusTarget::None => None,
        }
    }

    /// Compute the form layout for the current window and metrics
    pub fn layout(&self) -> crate::layout::FormLayout {
        crate::layout::FormLayout::compute(self)
    }
}
