//! CLI command implementations
//!
//! Each command writes its report to the given output so it can be tested
//! without a terminal.

pub mod cat;
pub mod convert;
pub mod demo;
pub mod info;
pub mod lines;
pub mod ls;
