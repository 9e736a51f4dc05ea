//! Convert command - Convert between JSON, YAML and CSV
//!
//! Formats come from the file extensions. CSV rows travel through JSON and
//! YAML as a record holding a single `rows` array.

use std::io::Write;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::cli::{output_error, Context};
use crate::errors::{FileKitError, Result};
use crate::fs;
use crate::schemas::{Format, Record, Row};

/// Key under which CSV rows are stored in a structured record
pub const ROWS_KEY: &str = "rows";

/// Parsed input, in whichever shape its format produces
#[derive(Debug, Clone, PartialEq)]
enum Content {
    Record(Record),
    Rows(Vec<Row>),
}

fn unsupported(path: &Path) -> FileKitError {
    FileKitError::InvalidArgument(format!(
        "Cannot convert {}: expected a .json, .yaml, .yml or .csv file",
        path.display()
    ))
}

fn format_of(path: &Path) -> Result<Format> {
    match Format::from_path(path) {
        Some(Format::Text) | None => Err(unsupported(path)),
        Some(format) => Ok(format),
    }
}

/// Wrap CSV rows in a record as `{"rows": [{...}, ...]}`.
pub fn record_from_rows(rows: Vec<Row>) -> Record {
    let rows = rows
        .into_iter()
        .map(|row| Value::Object(row.into_iter().map(|(k, v)| (k, Value::String(v))).collect()))
        .collect();

    let mut record = Record::new();
    record.insert(ROWS_KEY.to_string(), Value::Array(rows));
    record
}

/// Flatten the `rows` array of a record into CSV rows.
///
/// Scalars are stringified and null becomes an empty cell. Nested arrays or
/// objects have no CSV form and are rejected.
pub fn rows_from_record(record: &Record) -> Result<Vec<Row>> {
    let items = match record.get(ROWS_KEY) {
        Some(Value::Array(items)) => items,
        _ => {
            return Err(FileKitError::InvalidArgument(format!(
                "Expected a top-level \"{}\" array to write as CSV",
                ROWS_KEY
            )))
        }
    };

    let mut rows = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let object = item.as_object().ok_or_else(|| {
            FileKitError::InvalidArgument(format!("Row {} is not an object", index))
        })?;

        let mut row = Row::new();
        for (key, value) in object {
            let cell = match value {
                Value::Null => String::new(),
                Value::String(s) => s.clone(),
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(FileKitError::InvalidArgument(format!(
                        "Row {} field {:?} is nested and has no CSV form",
                        index, key
                    )))
                }
            };
            row.insert(key.clone(), cell);
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Convert `input` to `output`, choosing both formats by extension
pub fn run(
    ctx: &Context,
    input: &Path,
    output: &Path,
    indent: Option<usize>,
    delimiter: Option<char>,
    out: &mut dyn Write,
) -> Result<()> {
    let input = ctx.resolve(input);
    let output = ctx.resolve(output);
    let input_format = format_of(&input)?;
    let output_format = format_of(&output)?;
    let encoding = ctx.encoding();
    let indent = indent.unwrap_or(ctx.settings.json_indent);
    let delimiter = delimiter.unwrap_or(ctx.settings.csv_delimiter);

    let content = match input_format {
        Format::Json => Content::Record(fs::read_json(&input, encoding)?),
        Format::Yaml => Content::Record(fs::read_yaml(&input, encoding)?),
        Format::Csv => Content::Rows(fs::read_csv(&input, delimiter, encoding)?),
        Format::Text => return Err(unsupported(&input)),
    };

    match (output_format, content) {
        (Format::Csv, Content::Rows(rows)) => {
            fs::write_csv(&output, &rows, None::<&[&str]>, delimiter, encoding)?
        }
        (Format::Csv, Content::Record(record)) => {
            fs::write_csv(&output, &rows_from_record(&record)?, None::<&[&str]>, delimiter, encoding)?
        }
        (Format::Json, Content::Record(record)) => fs::write_json(&output, &record, encoding, indent)?,
        (Format::Json, Content::Rows(rows)) => {
            fs::write_json(&output, &record_from_rows(rows), encoding, indent)?
        }
        (Format::Yaml, Content::Record(record)) => fs::write_yaml(&output, &record, encoding)?,
        (Format::Yaml, Content::Rows(rows)) => fs::write_yaml(&output, &record_from_rows(rows), encoding)?,
        (Format::Text, _) => return Err(unsupported(&output)),
    }

    info!(from = %input_format, to = %output_format, output = %output.display(), "converted file");
    writeln!(out, "{} -> {}", input.display(), output.display()).map_err(output_error)
}
