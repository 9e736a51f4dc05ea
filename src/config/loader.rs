//! Settings loading with defaults

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::Result;
use crate::fs;
use crate::schemas::Settings;

/// Name of the optional settings file looked up in the working directory
pub const SETTINGS_FILE_NAME: &str = ".filekit.json";

/// Get the path to the settings file inside `dir`.
pub fn get_settings_path(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILE_NAME)
}

/// Load settings from `dir`, falling back to defaults.
///
/// If `.filekit.json` exists it is read, and any field it leaves out takes
/// its default. If it doesn't exist, default settings are returned.
///
/// # Arguments
/// * `dir` - Directory to look in, usually the working directory
///
/// # Errors
/// * `ParseError` - If the settings file exists but is not valid
pub fn load_settings(dir: &Path) -> Result<Settings> {
    let path = get_settings_path(dir);
    if !fs::file_exists(&path) {
        return Ok(Settings::default());
    }

    debug!(path = %path.display(), "loading settings");
    fs::read_json_as(&path, None)
}
