//! Settings for the filekit command line

mod loader;

pub use loader::{get_settings_path, load_settings, SETTINGS_FILE_NAME};
