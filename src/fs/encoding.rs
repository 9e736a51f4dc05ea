//! Character encoding helpers
//!
//! Resolves encoding labels and performs strict conversion between bytes and
//! strings. Nothing is replaced silently: undecodable input is a parse error
//! and unencodable output is an invalid argument.

use std::borrow::Cow;
use std::path::Path;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};

use crate::errors::{FileKitError, Result};

/// Encoding used when the caller does not name one
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Resolve an optional encoding label, defaulting to UTF-8.
///
/// Labels follow the WHATWG Encoding Standard, so `utf8`, `GBK`, `latin1`
/// and friends are all accepted.
///
/// # Errors
/// * `InvalidArgument` - If the label names no known encoding
pub fn resolve(label: Option<&str>) -> Result<&'static Encoding> {
    match label {
        None => Ok(UTF_8),
        Some(label) => Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
            FileKitError::InvalidArgument(format!("Unknown encoding: {}", label))
        }),
    }
}

/// Decode file bytes read from `path`.
///
/// No BOM sniffing is done; a UTF-8 BOM stays in the output as U+FEFF.
pub fn decode<'a>(bytes: &'a [u8], encoding: &'static Encoding, path: &Path) -> Result<Cow<'a, str>> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or_else(|| {
            FileKitError::Parse(format!(
                "{} is not valid {} text",
                path.display(),
                encoding.name()
            ))
        })
}

/// Encode text destined for `path`.
pub fn encode<'a>(text: &'a str, encoding: &'static Encoding, path: &Path) -> Result<Cow<'a, [u8]>> {
    // encoding_rs only emits UTF-8 for the UTF-16 family, so do those by hand.
    if encoding == UTF_16LE {
        return Ok(Cow::Owned(text.encode_utf16().flat_map(u16::to_le_bytes).collect()));
    }
    if encoding == UTF_16BE {
        return Ok(Cow::Owned(text.encode_utf16().flat_map(u16::to_be_bytes).collect()));
    }

    let (bytes, used, had_errors) = encoding.encode(text);
    if had_errors || used != encoding {
        return Err(FileKitError::InvalidArgument(format!(
            "Content for {} cannot be encoded as {}",
            path.display(),
            encoding.name()
        )));
    }
    Ok(bytes)
}
