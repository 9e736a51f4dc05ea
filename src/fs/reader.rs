//! File readers for text, JSON, CSV and YAML
//!
//! Every reader loads the whole file, decodes it with the requested encoding
//! and either returns the parsed value or fails without a partial result.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::errors::{FileKitError, Result};
use crate::schemas::{Record, Row};

use super::csv_delimiter;
use super::encoding;

/// Read a file and decode it to a string.
fn read_decoded(path: &Path, encoding: Option<&str>) -> Result<String> {
    let encoding = encoding::resolve(encoding)?;
    let bytes = fs::read(path).map_err(|e| FileKitError::from_io(e, "read file", path))?;
    let text = encoding::decode(&bytes, encoding, path)?.into_owned();

    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        encoding = encoding.name(),
        "read file"
    );
    Ok(text)
}

/// Read a whole text file.
///
/// # Arguments
/// * `path` - Path to the file
/// * `encoding` - Encoding label, UTF-8 when `None`
///
/// # Errors
/// * `NotFound` - If the file does not exist
/// * `ParseError` - If the bytes are not valid in the encoding
/// * `IoFailure` - For any other I/O error
pub fn read_text(path: impl AsRef<Path>, encoding: Option<&str>) -> Result<String> {
    read_decoded(path.as_ref(), encoding)
}

/// Read a text file as lines.
///
/// Each line keeps its terminator (`\n` or `\r\n`). A last line without a
/// terminator is returned as is.
pub fn read_lines(path: impl AsRef<Path>, encoding: Option<&str>) -> Result<Vec<String>> {
    let text = read_decoded(path.as_ref(), encoding)?;
    Ok(text.split_inclusive('\n').map(str::to_owned).collect())
}

/// Read a JSON file whose top level is an object.
///
/// # Errors
/// * `NotFound` - If the file does not exist
/// * `ParseError` - If the file is not valid JSON or not an object
/// * `IoFailure` - For any other I/O error
pub fn read_json(path: impl AsRef<Path>, encoding: Option<&str>) -> Result<Record> {
    read_json_as(path, encoding)
}

/// Read and deserialize a JSON file into any type.
pub fn read_json_as<T: DeserializeOwned>(path: impl AsRef<Path>, encoding: Option<&str>) -> Result<T> {
    let path = path.as_ref();
    let text = read_decoded(path, encoding)?;

    serde_json::from_str(&text).map_err(|e| {
        FileKitError::Parse(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Read a CSV file into rows keyed by the header line.
///
/// Rows shorter than the header get `""` for the missing columns. Values
/// beyond the last header column are dropped.
///
/// # Arguments
/// * `path` - Path to the CSV file
/// * `delimiter` - Field delimiter, must be ASCII
/// * `encoding` - Encoding label, UTF-8 when `None`
///
/// # Errors
/// * `NotFound` - If the file does not exist
/// * `ParseError` - If the content cannot be decoded or parsed
/// * `InvalidArgument` - If the delimiter is not usable
/// * `IoFailure` - For any other I/O error
pub fn read_csv(path: impl AsRef<Path>, delimiter: char, encoding: Option<&str>) -> Result<Vec<Row>> {
    let path = path.as_ref();
    let delimiter = csv_delimiter(delimiter)?;
    let text = read_decoded(path, encoding)?;

    let parse_error = |e: csv::Error| {
        FileKitError::Parse(format!("Invalid CSV in file {}: {}", path.display(), e))
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = reader.headers().map_err(parse_error)?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(parse_error)?;
        if record.len() > headers.len() {
            warn!(
                path = %path.display(),
                line = record.position().map(|p| p.line()),
                extra = record.len() - headers.len(),
                "dropping CSV values beyond the header"
            );
        }

        let row: Row = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), record.get(i).unwrap_or("").to_string()))
            .collect();
        rows.push(row);
    }

    debug!(path = %path.display(), rows = rows.len(), "parsed CSV");
    Ok(rows)
}

/// Read a YAML file whose top level is a mapping.
///
/// Loading is safe: only plain scalars, sequences and mappings are built.
/// An empty document yields an empty record.
///
/// # Errors
/// * `NotFound` - If the file does not exist
/// * `ParseError` - If the file is not valid YAML or not a string-keyed mapping
/// * `IoFailure` - For any other I/O error
pub fn read_yaml(path: impl AsRef<Path>, encoding: Option<&str>) -> Result<Record> {
    let path = path.as_ref();
    let value: serde_yaml::Value = read_yaml_as(path, encoding)?;
    if value.is_null() {
        return Ok(Record::new());
    }

    serde_yaml::from_value(value).map_err(|e| {
        FileKitError::Parse(format!("Invalid YAML in file {}: {}", path.display(), e))
    })
}

/// Read and deserialize a YAML file into any type.
pub fn read_yaml_as<T: DeserializeOwned>(path: impl AsRef<Path>, encoding: Option<&str>) -> Result<T> {
    let path = path.as_ref();
    let text = read_decoded(path, encoding)?;

    serde_yaml::from_str(&text).map_err(|e| {
        FileKitError::Parse(format!("Invalid YAML in file {}: {}", path.display(), e))
    })
}
