//! Record schema - In-memory shapes for structured and tabular file content

use std::path::Path;

use indexmap::IndexMap;

use crate::fs::get_file_extension;

/// Structured record: an insertion-ordered mapping used for JSON and YAML content
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Tabular row: column name to cell value, in header order
pub type Row = IndexMap<String, String>;

/// File format, as named by a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Text,
    Json,
    Csv,
    Yaml,
}

impl Format {
    /// Pick a format from the extension of `path`, case-insensitively.
    ///
    /// Returns `None` for extensions filekit has no reader for.
    pub fn from_path(path: &Path) -> Option<Format> {
        let extension = get_file_extension(path).to_ascii_lowercase();
        match extension.as_str() {
            ".txt" | ".text" | ".log" | ".md" => Some(Format::Text),
            ".json" => Some(Format::Json),
            ".csv" => Some(Format::Csv),
            ".yaml" | ".yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Text => write!(f, "text"),
            Format::Json => write!(f, "json"),
            Format::Csv => write!(f, "csv"),
            Format::Yaml => write!(f, "yaml"),
        }
    }
}
