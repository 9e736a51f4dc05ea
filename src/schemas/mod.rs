//! Schema types for filekit
//!
//! In-memory shapes for file content, plus the command-line settings file.

mod config;
mod record;

pub use config::Settings;
pub use record::{Format, Record, Row};
