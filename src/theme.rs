//! Theme system for the composer window
//!
//! Provides YAML-based theming support with compile-time embedded themes
//! and user-defined themes from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/chirp/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

// Embed theme YAML files at compile time
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/dark.yaml");
pub const DEFAULT_LIGHT_YAML: &str = include_str!("../themes/light.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default-dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
    BuiltinTheme {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Return a new color with the specified alpha value
    pub const fn with_alpha(&self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        if !s.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16).map_err(|e| e.to_string())
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Parse an optional hex string, falling back to a default when absent
fn color_or(value: &Option<String>, default: Color) -> Result<Color, String> {
    value
        .as_deref()
        .map(Color::from_hex)
        .transpose()
        .map(|c| c.unwrap_or(default))
}

// ============================================================================
// Raw YAML data
// ============================================================================

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    pub ui: UiThemeData,
}

/// UI theme colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct UiThemeData {
    pub window: WindowThemeData,
    pub field: FieldThemeData,
    #[serde(default)]
    pub counter: CounterThemeData,
    #[serde(default)]
    pub button: ButtonThemeData,
    #[serde(default)]
    pub chip: ChipThemeData,
    #[serde(default)]
    pub notification: NotificationThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowThemeData {
    pub background: String,
    pub foreground: String,
    #[serde(default)]
    pub muted: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldThemeData {
    pub background: String,
    pub foreground: String,
    pub border: String,
    #[serde(default)]
    pub border_focused: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CounterThemeData {
    #[serde(default)]
    pub normal: Option<String>,
    #[serde(default)]
    pub warning: Option<String>,
    #[serde(default)]
    pub over_limit: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ButtonThemeData {
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub background_hover: Option<String>,
    #[serde(default)]
    pub foreground: Option<String>,
    #[serde(default)]
    pub disabled_background: Option<String>,
    #[serde(default)]
    pub disabled_foreground: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ChipThemeData {
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub foreground: Option<String>,
    #[serde(default)]
    pub remove: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct NotificationThemeData {
    #[serde(default)]
    pub info_background: Option<String>,
    #[serde(default)]
    pub error_background: Option<String>,
    #[serde(default)]
    pub foreground: Option<String>,
}

// ============================================================================
// Resolved theme
// ============================================================================

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub window: WindowTheme,
    pub field: FieldTheme,
    pub counter: CounterTheme,
    pub button: ButtonTheme,
    pub chip: ChipTheme,
    pub notification: NotificationTheme,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowTheme {
    pub background: Color,
    pub foreground: Color,
    /// Labels and secondary text
    pub muted: Color,
}

/// Colors shared by the message field, the tag input and the preview
#[derive(Debug, Clone, PartialEq)]
pub struct FieldTheme {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,
    pub placeholder: Color,
    pub cursor: Color,
}

/// Remaining-budget counter colors
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTheme {
    pub normal: Color,
    /// Used when 20 or fewer characters remain
    pub warning: Color,
    pub over_limit: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonTheme {
    pub background: Color,
    pub background_hover: Color,
    pub foreground: Color,
    pub disabled_background: Color,
    pub disabled_foreground: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChipTheme {
    pub background: Color,
    pub foreground: Color,
    pub remove: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationTheme {
    pub info_background: Color,
    pub error_background: Color,
    pub foreground: Color,
}

impl Theme {
    /// Parse a theme from YAML. Optional sections fall back to the built-in
    /// dark palette.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse theme: {}", e))?;
        Self::from_data(data)
    }

    /// Load a builtin theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown builtin theme: {}", id))
            .and_then(|t| Self::from_yaml(t.yaml))
    }

    fn from_data(data: ThemeData) -> Result<Self, String> {
        let fallback = Self::fallback_dark();
        let ui = &data.ui;

        let window = WindowTheme {
            background: Color::from_hex(&ui.window.background)?,
            foreground: Color::from_hex(&ui.window.foreground)?,
            muted: color_or(&ui.window.muted, fallback.window.muted)?,
        };

        let field_foreground = Color::from_hex(&ui.field.foreground)?;
        let field = FieldTheme {
            background: Color::from_hex(&ui.field.background)?,
            foreground: field_foreground,
            border: Color::from_hex(&ui.field.border)?,
            border_focused: color_or(&ui.field.border_focused, fallback.field.border_focused)?,
            placeholder: color_or(&ui.field.placeholder, window.muted)?,
            cursor: color_or(&ui.field.cursor, field_foreground)?,
        };

        let counter = CounterTheme {
            normal: color_or(&ui.counter.normal, window.muted)?,
            warning: color_or(&ui.counter.warning, fallback.counter.warning)?,
            over_limit: color_or(&ui.counter.over_limit, fallback.counter.over_limit)?,
        };

        let button = ButtonTheme {
            background: color_or(&ui.button.background, fallback.button.background)?,
            background_hover: color_or(
                &ui.button.background_hover,
                fallback.button.background_hover,
            )?,
            foreground: color_or(&ui.button.foreground, fallback.button.foreground)?,
            disabled_background: color_or(
                &ui.button.disabled_background,
                fallback.button.disabled_background,
            )?,
            disabled_foreground: color_or(
                &ui.button.disabled_foreground,
                fallback.button.disabled_foreground,
            )?,
        };

        let chip = ChipTheme {
            background: color_or(&ui.chip.background, fallback.chip.background)?,
            foreground: color_or(&ui.chip.foreground, fallback.chip.foreground)?,
            remove: color_or(&ui.chip.remove, fallback.chip.remove)?,
        };

        let notification = NotificationTheme {
            info_background: color_or(
                &ui.notification.info_background,
                fallback.notification.info_background,
            )?,
            error_background: color_or(
                &ui.notification.error_background,
                fallback.notification.error_background,
            )?,
            foreground: color_or(&ui.notification.foreground, fallback.notification.foreground)?,
        };

        Ok(Theme {
            name: data.name,
            window,
            field,
            counter,
            button,
            chip,
            notification,
        })
    }

    /// Hardcoded dark palette, used for missing optional colors and when the
    /// embedded YAML cannot be parsed
    fn fallback_dark() -> Self {
        Theme {
            name: "Default Dark".to_string(),
            window: WindowTheme {
                background: Color::rgb(0x15, 0x20, 0x2B),
                foreground: Color::rgb(0xE7, 0xE9, 0xEA),
                muted: Color::rgb(0x8B, 0x98, 0xA5),
            },
            field: FieldTheme {
                background: Color::rgb(0x19, 0x27, 0x34),
                foreground: Color::rgb(0xE7, 0xE9, 0xEA),
                border: Color::rgb(0x38, 0x44, 0x4D),
                border_focused: Color::rgb(0x1D, 0x9B, 0xF0),
                placeholder: Color::rgb(0x8B, 0x98, 0xA5),
                cursor: Color::rgb(0xE7, 0xE9, 0xEA),
            },
            counter: CounterTheme {
                normal: Color::rgb(0x8B, 0x98, 0xA5),
                warning: Color::rgb(0xFF, 0xD4, 0x00),
                over_limit: Color::rgb(0xF4, 0x21, 0x2E),
            },
            button: ButtonTheme {
                background: Color::rgb(0x1D, 0x9B, 0xF0),
                background_hover: Color::rgb(0x1A, 0x8C, 0xD8),
                foreground: Color::rgb(0xFF, 0xFF, 0xFF),
                disabled_background: Color::rgb(0x2F, 0x3B, 0x45),
                disabled_foreground: Color::rgb(0x6E, 0x76, 0x7D),
            },
            chip: ChipTheme {
                background: Color::rgb(0x1E, 0x3A, 0x52),
                foreground: Color::rgb(0x8E, 0xCD, 0xF8),
                remove: Color::rgb(0xE7, 0xE9, 0xEA),
            },
            notification: NotificationTheme {
                info_background: Color::rgb(0x00, 0xBA, 0x7C),
                error_background: Color::rgb(0xF4, 0x21, 0x2E),
                foreground: Color::rgb(0xFF, 0xFF, 0xFF),
            },
        }
    }

    /// Default dark theme (YAML-backed with Rust fallback)
    pub fn default_dark() -> Self {
        Theme::from_yaml(DEFAULT_DARK_YAML).unwrap_or_else(|e| {
            tracing::warn!("Embedded dark theme is invalid: {}", e);
            Self::fallback_dark()
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#1D9BF0").unwrap(), Color::rgb(0x1D, 0x9B, 0xF0));
        assert_eq!(Color::from_hex("00000080").unwrap().a, 0x80);
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_to_argb() {
        assert_eq!(Color::rgb(0x12, 0x34, 0x56).to_argb_u32(), 0xFF12_3456);
    }

    #[test]
    fn test_builtins_parse() {
        for builtin in BUILTIN_THEMES {
            let theme = Theme::from_yaml(builtin.yaml);
            assert!(theme.is_ok(), "{} failed: {:?}", builtin.id, theme.err());
        }
    }

    #[test]
    fn test_unknown_builtin() {
        assert!(Theme::from_builtin("no-such-theme").is_err());
    }
}
