//! Font discovery and per-character fallback
//!
//! No font is bundled. Fonts listed in the config are tried first, then a
//! handful of well-known system locations. Every font that loads joins the
//! fallback chain so emoji and symbols can come from a second face.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use fontdue::{Font, FontSettings};

/// Monospace faces, tried in order; the first one that loads is primary
#[cfg(target_os = "macos")]
const SYSTEM_FONTS: &[&str] = &[
    "/System/Library/Fonts/SFNSMono.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "/System/Library/Fonts/Monaco.ttf",
    "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
];

#[cfg(target_os = "windows")]
const SYSTEM_FONTS: &[&str] = &[
    "C:\\Windows\\Fonts\\consola.ttf",
    "C:\\Windows\\Fonts\\cour.ttf",
    "C:\\Windows\\Fonts\\seguiemj.ttf",
    "C:\\Windows\\Fonts\\seguisym.ttf",
];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu-sans-mono-fonts/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSansMono-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoEmoji-Regular.ttf",
    "/usr/share/fonts/noto/NotoEmoji-Regular.ttf",
    "/usr/share/fonts/truetype/ancient-scripts/Symbola_hint.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
];

/// Ordered fallback chain of loaded fonts (never empty)
pub struct FontSet {
    fonts: Vec<Font>,
}

impl FontSet {
    /// Load configured fonts followed by system fonts.
    /// Fails only if nothing at all could be loaded.
    pub fn load(configured: &[PathBuf]) -> Result<Self> {
        let candidates = configured
            .iter()
            .map(PathBuf::as_path)
            .chain(SYSTEM_FONTS.iter().map(Path::new));

        let mut fonts = Vec::new();
        for path in candidates {
            if !path.exists() {
                continue;
            }
            match load_font(path) {
                Ok(font) => {
                    tracing::debug!("Loaded font {}", path.display());
                    fonts.push(font);
                }
                Err(e) => tracing::warn!("Skipping font {}: {}", path.display(), e),
            }
        }

        if fonts.is_empty() {
            return Err(anyhow!(
                "No usable font found; add a font file path under `fonts:` in the config"
            ));
        }
        Ok(Self { fonts })
    }

    /// The face used for metrics
    pub fn primary(&self) -> &Font {
        &self.fonts[0]
    }

    /// First face that has a glyph for `ch`, or the primary face
    pub fn font_for(&self, ch: char) -> &Font {
        self.fonts
            .iter()
            .find(|font| font.lookup_glyph_index(ch) != 0)
            .unwrap_or(&self.fonts[0])
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }
}

fn load_font(path: &Path) -> Result<Font> {
    let bytes = std::fs::read(path)?;
    Font::from_bytes(bytes, FontSettings::default()).map_err(|e| anyhow!(e))
}
