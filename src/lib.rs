//! Filekit - Uniform read/write helpers for text, JSON, CSV and YAML files
//!
//! This library provides:
//! - Readers and writers for plain text, JSON, CSV and YAML with optional
//!   character encodings
//! - Filesystem helpers: ensure a directory, list files, existence, size and
//!   extension lookup
//! - A typed error taxonomy shared by every operation
//! - The command-line front end used by the `filekit` binary
//!
//! Every operation is a single blocking call that holds no state between
//! calls.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod schemas;

// Re-export commonly used types
pub use errors::{ErrorKind, FileKitError, Result};
pub use schemas::{Format, Record, Row, Settings};
