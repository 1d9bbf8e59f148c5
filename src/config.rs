//! Composer configuration
//!
//! Read from `~/.config/chirp/config.yaml` at startup. The file is never
//! written by the program; every field is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::composer::DEFAULT_EMOJIS;

/// User preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposerConfig {
    /// Selected theme id (e.g., "default-dark", "default-light")
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Font size in points, before DPI scaling
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// Font files tried in order before the system fallbacks
    #[serde(default)]
    pub fonts: Vec<PathBuf>,

    /// Emoji palette shown above the tag input
    #[serde(default = "default_emojis")]
    pub emojis: Vec<String>,
}

fn default_theme() -> String {
    "default-dark".to_string()
}

fn default_font_size() -> f32 {
    15.0
}

fn default_emojis() -> Vec<String> {
    DEFAULT_EMOJIS.iter().map(|e| e.to_string()).collect()
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            font_size: default_font_size(),
            fonts: Vec::new(),
            emojis: default_emojis(),
        }
    }
}

impl ComposerConfig {
    /// Load config from the user config dir, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from_path(&path)
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse YAML config text and sanitize values
    pub fn parse(content: &str) -> Result<Self, String> {
        // An empty file deserializes as null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        config.sanitize();
        Ok(config)
    }

    fn sanitize(&mut self) {
        if !self.font_size.is_finite() || self.font_size < 6.0 || self.font_size > 72.0 {
            tracing::warn!(
                "Ignoring font_size {} (expected 6-72), using {}",
                self.font_size,
                default_font_size()
            );
            self.font_size = default_font_size();
        }
        self.emojis.retain(|e| !e.trim().is_empty());
        if self.emojis.is_empty() {
            self.emojis = default_emojis();
        }
    }
}
