//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific data directory for ranked content
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/ranked`
/// - Linux: `~/.local/share/ranked` (or `$XDG_DATA_HOME/ranked`)
/// - Windows: `%APPDATA%\ranked`
pub fn data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "ranked").map(|dirs| dirs.data_dir().to_path_buf())
}

/// The platform data directory, only if it has been created.
pub fn existing_data_dir() -> Option<PathBuf> {
    data_dir().filter(|dir| dir.is_dir())
}
