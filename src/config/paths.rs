use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, SYSTEM_CONFIG_DIR};
use std::path::{Path, PathBuf};

/// Returns the platform-specific path for the user config file.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR_NAME)
        .join(CONFIG_FILE_NAME)
        .to_string_lossy()
        .to_string()
}

/// Config file locations in lookup order: working directory, user config
/// directory, then the system-wide directory.
pub fn config_search_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from(CONFIG_FILE_NAME),
        PathBuf::from(get_config_path()),
        Path::new(SYSTEM_CONFIG_DIR).join(CONFIG_FILE_NAME),
    ]
}

/// First search path that exists on disk.
pub fn find_config_file() -> Option<PathBuf> {
    config_search_paths().into_iter().find(|path| path.is_file())
}
