//! Centralized configuration paths for chirp
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/chirp/`
//! - Windows: `%APPDATA%\chirp\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "chirp";

/// Base name of the rolling log file (`chirp.log.YYYY-MM-DD`)
pub const LOG_FILE_PREFIX: &str = "chirp.log";

/// Base config directory for chirp
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/chirp`
///   - Else: `~/.config/chirp`
///
/// Windows:
///   - `%APPDATA%\chirp`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/chirp/themes/`
pub fn themes_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("themes"))
}

/// `~/.config/chirp/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/chirp/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&logs)?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_share_base_dir() {
        let (Some(base), Some(config), Some(themes), Some(logs)) =
            (config_dir(), config_file(), themes_dir(), logs_dir())
        else {
            return;
        };
        assert!(base.ends_with(APP_DIR));
        assert_eq!(config, base.join("config.yaml"));
        assert_eq!(themes, base.join("themes"));
        assert_eq!(logs, base.join("logs"));
    }
}
