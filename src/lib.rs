//! chirp - Elm-style composer for short social posts
//!
//! This crate provides the core types and logic: the composer model with
//! its character budget and export rules, the messages and update
//! functions that drive it, and the pure form layout the window renders.

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod layout;
pub mod messages;
pub mod model;
pub mod theme;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ComposerConfig;
pub use messages::Msg;
pub use model::{AppModel, Composer, ExportBlock};
pub use theme::Theme;
