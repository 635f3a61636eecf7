//! Cross-platform directory path resolution
//!
//! Provides functions to resolve platform-appropriate paths for configuration.
//! - Linux/macOS: XDG Base Directory specification (~/.config)
//! - Windows: Known Folder API (AppData\Roaming)

use std::path::{Path, PathBuf};

/// File name of the per-source-tree configuration
pub const PROJECT_CONFIG_FILE: &str = ".roledeps.yaml";

/// Get the configuration directory path
///
/// Checks ROLEDEPS_CONFIG_DIR environment variable first, then falls back to:
/// - Unix (Linux/macOS): XDG_CONFIG_HOME/roledeps or ~/.config/roledeps
/// - Windows: %APPDATA%\roledeps\config
pub fn config_dir() -> PathBuf {
    std::env::var("ROLEDEPS_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            #[cfg(windows)]
            {
                use directories::ProjectDirs;
                ProjectDirs::from("", "", "roledeps")
                    .map(|dirs| dirs.config_dir().to_path_buf())
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join("roledeps"))
            }
            #[cfg(not(windows))]
            {
                use directories::BaseDirs;
                std::env::var("XDG_CONFIG_HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| {
                        BaseDirs::new()
                            .map(|dirs| dirs.home_dir().join(".config"))
                            .unwrap_or_else(|| PathBuf::from(".").join(".config"))
                    })
                    .join("roledeps")
            }
        })
}

/// Get the root configuration file path
pub fn root_config_path() -> PathBuf {
    config_dir().join("config.yaml")
}

/// Get the project configuration file path for a source tree
pub fn project_config_path(source: &Path) -> PathBuf {
    source.join(PROJECT_CONFIG_FILE)
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
