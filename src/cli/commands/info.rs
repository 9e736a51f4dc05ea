//! Info command - Show existence, size and extension of a path

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::cli::{output_error, Context};
use crate::errors::{FileKitError, Result};
use crate::fs;

/// What filekit can tell about a path without reading it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathInfo {
    pub path: String,
    pub is_file: bool,
    pub size: Option<u64>,
    pub extension: String,
}

/// Inspect `path`. Never fails for a missing path.
pub fn inspect(path: &Path) -> Result<PathInfo> {
    let is_file = fs::file_exists(path);
    let size = if is_file { Some(fs::get_file_size(path)?) } else { None };

    Ok(PathInfo {
        path: path.display().to_string(),
        is_file,
        size,
        extension: fs::get_file_extension(path),
    })
}

/// Show existence, size and extension of a path
pub fn run(ctx: &Context, path: &Path, json: bool, out: &mut dyn Write) -> Result<()> {
    let info = inspect(&ctx.resolve(path))?;

    if json {
        let rendered = serde_json::to_string_pretty(&info)
            .map_err(|e| FileKitError::InvalidArgument(e.to_string()))?;
        return writeln!(out, "{}", rendered).map_err(output_error);
    }

    writeln!(out, "path:      {}", info.path).map_err(output_error)?;
    writeln!(out, "file:      {}", if info.is_file { "yes" } else { "no" }).map_err(output_error)?;
    if let Some(size) = info.size {
        writeln!(out, "size:      {} bytes", size).map_err(output_error)?;
    }
    writeln!(out, "extension: {}", info.extension).map_err(output_error)?;
    Ok(())
}
