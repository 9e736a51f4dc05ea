//! File system utilities for filekit
//!
//! Readers and writers for text, JSON, CSV and YAML, plus directory and
//! path helpers. Every function is a single blocking call with no state kept
//! between calls.

mod encoding;
mod paths;
mod reader;
mod utils;
mod writer;

pub use encoding::DEFAULT_ENCODING;
pub use paths::get_file_extension;
pub use reader::{read_csv, read_json, read_json_as, read_lines, read_text, read_yaml, read_yaml_as};
pub use utils::{ensure_dir, file_exists, get_file_size, list_files};
pub use writer::{write_csv, write_json, write_lines, write_text, write_text_atomic, write_yaml};

use crate::errors::{FileKitError, Result};

/// Indentation width used for JSON output unless told otherwise
pub const DEFAULT_JSON_INDENT: usize = 4;

/// Field delimiter used for CSV unless told otherwise
pub const DEFAULT_CSV_DELIMITER: char = ',';

/// Validate a CSV delimiter and narrow it to the byte the csv crate wants.
fn csv_delimiter(delimiter: char) -> Result<u8> {
    match delimiter {
        '"' | '\r' | '\n' => Err(FileKitError::InvalidArgument(format!(
            "{:?} cannot be used as a CSV delimiter",
            delimiter
        ))),
        c if c.is_ascii() => Ok(c as u8),
        c => Err(FileKitError::InvalidArgument(format!(
            "CSV delimiter must be a single ASCII character, got {:?}",
            c
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_delimiter() {
        assert_eq!(csv_delimiter(',').unwrap(), b',');
        assert_eq!(csv_delimiter('\t').unwrap(), b'\t');
        assert!(csv_delimiter('"').is_err());
        assert!(csv_delimiter('§').is_err());
    }
}
