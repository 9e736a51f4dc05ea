//! Cat command - Print the contents of a text file

use std::io::Write;
use std::path::Path;

use crate::cli::{output_error, Context};
use crate::errors::Result;
use crate::fs;

/// Print a text file exactly as decoded
pub fn run(ctx: &Context, path: &Path, out: &mut dyn Write) -> Result<()> {
    let content = fs::read_text(ctx.resolve(path), ctx.encoding())?;
    out.write_all(content.as_bytes()).map_err(output_error)
}
