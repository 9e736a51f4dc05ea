//! Ls command - List the files in a directory

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::cli::{output_error, Context};
use crate::errors::{FileKitError, Result};
use crate::fs;

/// One listed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub size: u64,
    pub extension: String,
}

/// Collect name, size and extension for the files in `dir`, sorted by name.
pub fn collect(dir: &Path, extension: Option<&str>) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();
    for path in fs::list_files(dir, extension)? {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        entries.push(FileEntry {
            size: fs::get_file_size(&path)?,
            extension: fs::get_file_extension(&path),
            name,
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// List the files in a directory
pub fn run(ctx: &Context, dir: &Path, ext: Option<&str>, json: bool, out: &mut dyn Write) -> Result<()> {
    let entries = collect(&ctx.resolve(dir), ext)?;

    if json {
        let rendered = serde_json::to_string_pretty(&entries)
            .map_err(|e| FileKitError::InvalidArgument(e.to_string()))?;
        return writeln!(out, "{}", rendered).map_err(output_error);
    }

    for entry in &entries {
        let extension = if entry.extension.is_empty() { "-" } else { entry.extension.as_str() };
        writeln!(out, "{:>10}  {:<6}  {}", entry.size, extension, entry.name).map_err(output_error)?;
    }
    Ok(())
}
