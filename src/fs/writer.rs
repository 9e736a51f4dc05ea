//! File writers for text, JSON, CSV and YAML
//!
//! Content is serialized and encoded in memory before the target is opened,
//! so argument errors never touch the file. The write itself is not atomic:
//! an I/O failure part way through can leave a truncated file behind.
//! [`write_text_atomic`] is available when that matters.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::errors::{FileKitError, Result};
use crate::schemas::Row;

use super::csv_delimiter;
use super::encoding;

/// Encode `text` and write it to `path`, truncating or appending.
fn write_encoded(path: &Path, text: &str, encoding: Option<&str>, append: bool) -> Result<()> {
    let encoding = encoding::resolve(encoding)?;
    let bytes = encoding::encode(text, encoding, path)?;

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .map_err(|e| FileKitError::io(e, "open file for writing", path))?;
    file.write_all(&bytes)
        .map_err(|e| FileKitError::io(e, "write file", path))?;

    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        encoding = encoding.name(),
        append,
        "wrote file"
    );
    Ok(())
}

/// Write a string to a text file.
///
/// # Arguments
/// * `path` - Path to the file, created if absent
/// * `content` - Text to write
/// * `encoding` - Encoding label, UTF-8 when `None`
/// * `append` - Append instead of truncating
///
/// # Errors
/// * `InvalidArgument` - If the encoding is unknown or cannot represent the text
/// * `IoFailure` - If the file cannot be opened or written
pub fn write_text(path: impl AsRef<Path>, content: &str, encoding: Option<&str>, append: bool) -> Result<()> {
    write_encoded(path.as_ref(), content, encoding, append)
}

/// Write strings to a text file, concatenated as given.
///
/// No line terminators are added; include them in `lines`.
pub fn write_lines<S: AsRef<str>>(
    path: impl AsRef<Path>,
    lines: &[S],
    encoding: Option<&str>,
    append: bool,
) -> Result<()> {
    let content: String = lines.iter().map(|line| AsRef::<str>::as_ref(line)).collect();
    write_encoded(path.as_ref(), &content, encoding, append)
}

/// Write a string through a temporary sibling file and rename it into place.
///
/// Readers of `path` see either the old content or the new, never a mix.
pub fn write_text_atomic(path: impl AsRef<Path>, content: &str, encoding: Option<&str>) -> Result<()> {
    let path = path.as_ref();
    let file_name = path.file_name().ok_or_else(|| {
        FileKitError::InvalidArgument(format!("No file name in path {}", path.display()))
    })?;
    let encoding = encoding::resolve(encoding)?;
    let bytes = encoding::encode(content, encoding, path)?;

    let mut temp_name = std::ffi::OsString::from(".");
    temp_name.push(file_name);
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let mut file = fs::File::create(&temp_path)
        .map_err(|e| FileKitError::io(e, "create temporary file", &temp_path))?;
    file.write_all(&bytes)
        .and_then(|()| file.sync_all())
        .map_err(|e| FileKitError::io(e, "write temporary file", &temp_path))?;
    drop(file);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        FileKitError::io(e, "replace file", path)
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "atomically replaced file");
    Ok(())
}

/// Write a value as pretty-printed JSON.
///
/// Keys keep the order of the input and non-ASCII characters are written
/// literally. No trailing newline is added.
///
/// # Arguments
/// * `path` - Path to the JSON file
/// * `data` - The value to serialize
/// * `encoding` - Encoding label, UTF-8 when `None`
/// * `indent` - Spaces per nesting level
///
/// # Errors
/// * `InvalidArgument` - If the value cannot be represented as JSON
/// * `IoFailure` - If the file cannot be written
pub fn write_json<T: Serialize + ?Sized>(
    path: impl AsRef<Path>,
    data: &T,
    encoding: Option<&str>,
    indent: usize,
) -> Result<()> {
    let path = path.as_ref();
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    data.serialize(&mut serializer).map_err(|e| {
        FileKitError::InvalidArgument(format!("Cannot serialize JSON for {}: {}", path.display(), e))
    })?;

    let content = String::from_utf8(buf).map_err(|e| {
        FileKitError::InvalidArgument(format!("Cannot serialize JSON for {}: {}", path.display(), e))
    })?;
    write_encoded(path, &content, encoding, false)
}

/// Write rows as CSV with a header line.
///
/// When `fieldnames` is `None` the columns are the keys of the first row.
/// A row missing a column gets an empty cell. Records end with `\r\n`.
///
/// # Errors
/// * `InvalidArgument` - If `rows` is empty, the field names are empty, a row
///   has a key outside the field names, or the delimiter is not usable
/// * `IoFailure` - If the file cannot be written
pub fn write_csv<S: AsRef<str>>(
    path: impl AsRef<Path>,
    rows: &[Row],
    fieldnames: Option<&[S]>,
    delimiter: char,
    encoding: Option<&str>,
) -> Result<()> {
    let path = path.as_ref();
    let delimiter = csv_delimiter(delimiter)?;

    let first = rows.first().ok_or_else(|| {
        FileKitError::InvalidArgument(format!("No rows to write to {}", path.display()))
    })?;
    let fieldnames: Vec<&str> = match fieldnames {
        Some(names) => names.iter().map(AsRef::<str>::as_ref).collect(),
        None => first.keys().map(String::as_str).collect(),
    };
    if fieldnames.is_empty() {
        return Err(FileKitError::InvalidArgument(format!(
            "Field names cannot be empty for {}",
            path.display()
        )));
    }
    for (index, row) in rows.iter().enumerate() {
        if let Some(key) = row.keys().find(|key| !fieldnames.contains(&key.as_str())) {
            return Err(FileKitError::InvalidArgument(format!(
                "Row {} for {} has field {:?} that is not in the field names",
                index,
                path.display(),
                key
            )));
        }
    }

    let csv_error = |e: csv::Error| {
        FileKitError::InvalidArgument(format!("Cannot serialize CSV for {}: {}", path.display(), e))
    };
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());
    writer.write_record(&fieldnames).map_err(csv_error)?;
    for row in rows {
        let cells = fieldnames
            .iter()
            .map(|name| row.get(*name).map(String::as_str).unwrap_or(""));
        writer.write_record(cells).map_err(csv_error)?;
    }
    let buf = writer
        .into_inner()
        .map_err(|e| {
            FileKitError::InvalidArgument(format!("Cannot serialize CSV for {}: {}", path.display(), e))
        })?;

    let content = String::from_utf8(buf).map_err(|e| {
        FileKitError::InvalidArgument(format!("Cannot serialize CSV for {}: {}", path.display(), e))
    })?;
    debug!(path = %path.display(), rows = rows.len(), columns = fieldnames.len(), "serialized CSV");
    write_encoded(path, &content, encoding, false)
}

/// Write a value as block-style YAML.
///
/// Keys keep the order of the input and non-ASCII characters are written
/// literally.
///
/// # Errors
/// * `InvalidArgument` - If the value cannot be represented as YAML
/// * `IoFailure` - If the file cannot be written
pub fn write_yaml<T: Serialize + ?Sized>(path: impl AsRef<Path>, data: &T, encoding: Option<&str>) -> Result<()> {
    let path = path.as_ref();
    let content = serde_yaml::to_string(data).map_err(|e| {
        FileKitError::InvalidArgument(format!("Cannot serialize YAML for {}: {}", path.display(), e))
    })?;
    write_encoded(path, &content, encoding, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::fs::{read_csv, read_json, read_lines, read_text, read_yaml};
    use crate::schemas::Record;
    use serde_json::json;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn sample_record() -> Record {
        match json!({
            "name": "测试配置",
            "version": "1.0.0",
            "settings": {"debug": true, "log_level": "INFO", "max_retries": 3},
            "users": [{"id": 1, "name": "用户1"}, {"id": 2, "name": "用户2"}]
        }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_write_and_read_text() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hello.txt");

        write_text(&path, "Hello, World!\n这是一个示例文本文件。", None, false).unwrap();
        assert_eq!(read_text(&path, None).unwrap(), "Hello, World!\n这是一个示例文本文件。");
    }

    #[test]
    fn test_write_text_truncates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("t.txt");

        write_text(&path, "a much longer first version", None, false).unwrap();
        write_text(&path, "short", None, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_write_text_append() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("log.txt");

        write_text(&path, "first\n", None, true).unwrap();
        write_text(&path, "second\n", None, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_write_text_missing_parent_is_io_failure() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no").join("such").join("dir.txt");

        let err = write_text(&path, "x", None, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
        assert!(err.to_string().contains("dir.txt"));
    }

    #[test]
    fn test_write_text_unencodable_leaves_file_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("latin.txt");
        fs::write(&path, "keep me").unwrap();

        let err = write_text(&path, "汉字", Some("latin1"), false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn test_write_text_gbk_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gbk.txt");

        write_text(&path, "文件工具库测试", Some("gbk"), false).unwrap();
        assert!(read_text(&path, None).is_err());
        assert_eq!(read_text(&path, Some("gbk")).unwrap(), "文件工具库测试");
    }

    #[test]
    fn test_write_lines_verbatim() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lines.txt");

        write_lines(&path, &["a\n", "b", "c\n"], None, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nbc\n");
        assert_eq!(read_lines(&path, None).unwrap(), vec!["a\n", "bc\n"]);
    }

    #[test]
    fn test_write_lines_append_owned_strings() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lines.txt");
        let lines = vec!["x\n".to_string(), "y\n".to_string()];

        write_lines(&path, &lines, None, false).unwrap();
        write_lines(&path, &lines, None, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "x\ny\nx\ny\n");
    }

    #[test]
    fn test_write_text_atomic_replaces() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.txt");
        fs::write(&path, "old").unwrap();

        write_text_atomic(&path, "new", None).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!temp.path().join(".state.txt.tmp").exists());
    }

    #[test]
    fn test_write_json_unicode_literal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("u.json");
        let record = match json!({"name": "测试", "value": 1}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };

        write_json(&path, &record, None, 4).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "{\n    \"name\": \"测试\",\n    \"value\": 1\n}");
        assert!(!raw.contains("\\u"));
        assert_eq!(read_json(&path, None).unwrap(), record);
    }

    #[test]
    fn test_write_json_indent_width() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("i.json");

        write_json(&path, &json!({"a": [1]}), None, 2).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\n  \"a\": [\n    1\n  ]\n}");
    }

    #[test]
    fn test_write_json_round_trip_nested() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        let record = sample_record();

        write_json(&path, &record, None, 4).unwrap();
        let read = read_json(&path, None).unwrap();
        assert_eq!(read, record);
        let keys: Vec<&String> = read.keys().collect();
        assert_eq!(keys, ["name", "version", "settings", "users"]);
    }

    #[test]
    fn test_write_json_non_string_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        let mut data = HashMap::new();
        data.insert(vec![1u8], "x");

        let err = write_json(&path, &data, None, 4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(!path.exists());
    }

    #[test]
    fn test_write_csv_and_read_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.csv");
        let rows = vec![
            row(&[("id", "1"), ("name", "产品1"), ("price", "100.0")]),
            row(&[("id", "2"), ("name", "产品2"), ("price", "200.0")]),
            row(&[("id", "3"), ("name", "产品3"), ("price", "300.0")]),
        ];

        write_csv(&path, &rows, None::<&[&str]>, ',', None).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "id,name,price\r\n1,产品1,100.0\r\n2,产品2,200.0\r\n3,产品3,300.0\r\n"
        );
        assert_eq!(read_csv(&path, ',', None).unwrap(), rows);
    }

    #[test]
    fn test_write_csv_quotes_special_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("q.csv");
        let rows = vec![row(&[("text", "a,b"), ("quote", "say \"hi\""), ("multi", "l1\nl2")])];

        write_csv(&path, &rows, None::<&[&str]>, ',', None).unwrap();
        assert_eq!(read_csv(&path, ',', None).unwrap(), rows);
    }

    #[test]
    fn test_write_csv_explicit_fieldnames() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("f.csv");
        let rows = vec![row(&[("b", "2"), ("a", "1")]), row(&[("a", "3")])];

        write_csv(&path, &rows, Some(&["a", "b"][..]), '\t', None).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\tb\r\n1\t2\r\n3\t\r\n");
    }

    #[test]
    fn test_write_csv_owned_fieldnames() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("owned.csv");
        let names: Vec<String> = vec!["name".to_string(), "id".to_string()];
        let rows = vec![row(&[("id", "7"), ("name", "测试")])];

        write_csv(&path, &rows, Some(names.as_slice()), ',', None).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "name,id\r\n测试,7\r\n");
    }

    #[test]
    fn test_write_csv_empty_rows() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.csv");

        let err = write_csv(&path, &[], None::<&[&str]>, ',', None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(!path.exists());
    }

    #[test]
    fn test_write_csv_empty_fieldnames() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nofields.csv");

        let err = write_csv(&path, &[Row::new()], None::<&[&str]>, ',', None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = write_csv(&path, &[row(&[("a", "1")])], Some(&[] as &[&str]), ',', None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_write_csv_unknown_field() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("extra.csv");
        let rows = vec![row(&[("a", "1")]), row(&[("a", "2"), ("z", "9")])];

        let err = write_csv(&path, &rows, None::<&[&str]>, ',', None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("\"z\""));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_yaml_block_style_and_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        let record = sample_record();

        write_yaml(&path, &record, None).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("name: 测试配置\n"));
        assert!(raw.contains("settings:\n  debug: true\n"));
        assert!(!raw.contains('{'));
        assert_eq!(read_yaml(&path, None).unwrap(), record);
    }
}
