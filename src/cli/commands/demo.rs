//! Demo command - Walk through writing and reading every supported format

use std::io::Write;
use std::path::Path;

use serde_json::{json, Value};

use crate::cli::{output_error, Context};
use crate::errors::{FileKitError, Result};
use crate::fs;
use crate::schemas::{Record, Row};

const RULE: &str = "--------------------------------------------------";

fn sample_config() -> Record {
    let value = json!({
        "name": "测试配置",
        "version": "1.0.0",
        "settings": {
            "debug": true,
            "log_level": "INFO",
            "max_retries": 3
        },
        "users": [
            {"id": 1, "name": "用户1"},
            {"id": 2, "name": "用户2"}
        ]
    });
    match value {
        Value::Object(map) => map,
        _ => Record::new(),
    }
}

fn sample_rows() -> Vec<Row> {
    [("1", "产品1", "100.0"), ("2", "产品2", "200.0"), ("3", "产品3", "300.0")]
        .into_iter()
        .map(|(id, name, price)| {
            [("id", id), ("name", name), ("price", price)]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        })
        .collect()
}

/// Write sample text, JSON and CSV files into `dir`, read them back and
/// list the directory.
pub fn run(ctx: &Context, dir: &Path, out: &mut dyn Write) -> Result<()> {
    let dir = ctx.resolve(dir);
    let encoding = ctx.encoding();
    let mut say = |line: String| writeln!(out, "{}", line).map_err(output_error);

    say("filekit demo".to_string())?;
    say(RULE.to_string())?;

    fs::ensure_dir(&dir)?;
    say(format!("Created directory: {}", dir.display()))?;

    let text_file = dir.join("hello.txt");
    fs::write_text(&text_file, "Hello, World!\n这是一个示例文本文件。\n文件工具库测试。", encoding, false)?;
    say(format!("Wrote text file: {}", text_file.display()))?;
    let content = fs::read_text(&text_file, encoding)?;
    say(format!("Read text file:\n{}", content))?;
    say(RULE.to_string())?;

    let json_file = dir.join("config.json");
    fs::write_json(&json_file, &sample_config(), encoding, ctx.settings.json_indent)?;
    say(format!("Wrote JSON file: {}", json_file.display()))?;
    let config = fs::read_json(&json_file, encoding)?;
    let rendered = serde_json::to_string_pretty(&config)
        .map_err(|e| FileKitError::InvalidArgument(e.to_string()))?;
    say(format!("Read JSON file:\n{}", rendered))?;
    say(RULE.to_string())?;

    let csv_file = dir.join("data.csv");
    let delimiter = ctx.settings.csv_delimiter;
    fs::write_csv(&csv_file, &sample_rows(), None::<&[&str]>, delimiter, encoding)?;
    say(format!("Wrote CSV file: {}", csv_file.display()))?;
    say("Read CSV file:".to_string())?;
    for row in fs::read_csv(&csv_file, delimiter, encoding)? {
        let cells: Vec<String> = row.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        say(format!("  {}", cells.join(", ")))?;
    }
    say(RULE.to_string())?;

    say(format!("Files in {}:", dir.display()))?;
    let mut files = fs::list_files(&dir, None)?;
    files.sort();
    for file in files {
        let name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        say(format!(
            "  {} (size: {} bytes, extension: {})",
            name,
            fs::get_file_size(&file)?,
            fs::get_file_extension(&file)
        ))?;
    }

    say("\nDemo complete!".to_string())
}
