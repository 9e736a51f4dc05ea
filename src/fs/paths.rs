//! Path string utilities
//!
//! Pure string operations on paths; nothing here touches the filesystem.

use std::path::{is_separator, Path};

/// Get the extension of the file named by `path`, including the dot.
///
/// The extension runs from the final `.` of the base name to its end.
/// Leading dots do not start an extension, so hidden files such as
/// `.bashrc` have none.
///
/// # Examples
/// * `archive.tar.gz` -> `.gz`
/// * `README` -> `""`
/// * `name.` -> `.`
pub fn get_file_extension(path: impl AsRef<Path>) -> String {
    let path = path.as_ref().to_string_lossy();
    let base = match path.rfind(is_separator) {
        Some(index) => &path[index + 1..],
        None => &path[..],
    };

    let stem_start = base.len() - base.trim_start_matches('.').len();
    match base[stem_start..].rfind('.') {
        Some(dot) => base[stem_start + dot..].to_string(),
        None => String::new(),
    }
}
