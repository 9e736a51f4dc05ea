//! Settings schema - Defaults applied by the filekit command line

use serde::{Deserialize, Serialize};

use crate::fs::{DEFAULT_CSV_DELIMITER, DEFAULT_ENCODING, DEFAULT_JSON_INDENT};

/// Command-line defaults, read from `.filekit.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Encoding label for reads and writes (e.g., "utf-8", "gbk")
    #[serde(default = "default_encoding")]
    pub encoding: String,

    /// Indentation width for JSON output
    #[serde(default = "default_json_indent")]
    pub json_indent: usize,

    /// Field delimiter for CSV input and output
    #[serde(default = "default_csv_delimiter")]
    pub csv_delimiter: char,
}

fn default_encoding() -> String {
    DEFAULT_ENCODING.to_string()
}

fn default_json_indent() -> usize {
    DEFAULT_JSON_INDENT
}

fn default_csv_delimiter() -> char {
    DEFAULT_CSV_DELIMITER
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            encoding: default_encoding(),
            json_indent: default_json_indent(),
            csv_delimiter: default_csv_delimiter(),
        }
    }
}
