//! Command-line argument parsing
//!
//! Supports:
//! - Seeding the message and tags
//! - Overriding the theme
//! - Headless print mode (compose and write to stdout, no window)

use clap::Parser;

use chirp::model::Composer;

/// Compose a short post with hashtags and copy it to the clipboard
#[derive(Parser, Debug)]
#[command(name = "chirp", version, about = "Compose a short post with hashtags")]
pub struct CliArgs {
    /// Initial message text
    #[arg(short = 't', long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Add a hashtag (without '#'); may be repeated
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Theme id, overriding the config file
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// Print the composed post to stdout instead of opening a window
    #[arg(short = 'p', long)]
    pub print: bool,

    /// With --print, emit the post and its derived values as JSON
    #[arg(long, requires = "print")]
    pub json: bool,
}

/// What the process does after startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupMode {
    /// Open the composer window
    Window,
    /// Compose headlessly and print
    Print { json: bool },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    pub mode: StartupMode,
    pub message: Option<String>,
    pub tags: Vec<String>,
    pub theme: Option<String>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if self.theme.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err("--theme must not be empty".to_string());
        }

        let mode = if self.print {
            StartupMode::Print { json: self.json }
        } else {
            StartupMode::Window
        };

        Ok(StartupConfig {
            mode,
            message: self.text,
            tags: self.tags,
            theme: self.theme,
        })
    }
}

impl StartupConfig {
    /// Apply the seeded message and tags. Tags go through the normal add
    /// rules, so empty and duplicate tags are dropped.
    pub fn seed(&self, composer: &mut Composer) {
        if let Some(message) = &self.message {
            composer.set_message(message.as_str());
        }
        for tag in &self.tags {
            if !composer.add_tag(tag) {
                tracing::debug!("Skipping seeded tag {:?}", tag);
            }
        }
    }
}
