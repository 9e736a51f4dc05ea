//! Lines command - Print a text file with line numbers

use std::io::Write;
use std::path::Path;

use crate::cli::{output_error, Context};
use crate::errors::Result;
use crate::fs;

/// Print each line prefixed by its 1-based number
pub fn run(ctx: &Context, path: &Path, out: &mut dyn Write) -> Result<()> {
    let lines = fs::read_lines(ctx.resolve(path), ctx.encoding())?;
    for (index, line) in lines.iter().enumerate() {
        let text = line.trim_end_matches(&['\r', '\n'][..]);
        writeln!(out, "{:>6}  {}", index + 1, text).map_err(output_error)?;
    }
    Ok(())
}
