//! CLI module for filekit
//!
//! Provides the command-line interface using clap.

pub mod commands;

use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::errors::FileKitError;
use crate::schemas::Settings;

/// Filekit - Read, write, convert and inspect text, JSON, CSV and YAML files
#[derive(Parser, Debug)]
#[command(name = "filekit")]
#[command(version)]
#[command(about = "Read, write, convert and inspect text, JSON, CSV and YAML files")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Character encoding for reads and writes (overrides .filekit.json)
    #[arg(short, long, global = true)]
    pub encoding: Option<String>,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the contents of a text file
    Cat {
        /// File to read
        path: PathBuf,
    },

    /// Print a text file with line numbers
    Lines {
        /// File to read
        path: PathBuf,
    },

    /// List the files in a directory
    Ls {
        /// Directory to list
        dir: PathBuf,

        /// Keep only names ending with this suffix (e.g. ".txt")
        #[arg(long)]
        ext: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show existence, size and extension of a path
    Info {
        /// Path to inspect
        path: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert between JSON, YAML and CSV, chosen by file extension
    Convert {
        /// Input file (.json, .yaml, .yml or .csv)
        input: PathBuf,

        /// Output file (.json, .yaml, .yml or .csv)
        output: PathBuf,

        /// JSON indentation width
        #[arg(long)]
        indent: Option<usize>,

        /// CSV field delimiter
        #[arg(long)]
        delimiter: Option<char>,
    },

    /// Walk through writing and reading every supported format
    Demo {
        /// Directory to create the sample files in
        #[arg(default_value = "examples_demo")]
        dir: PathBuf,
    },
}

/// Working directory and settings shared by every command
#[derive(Debug, Clone)]
pub struct Context {
    pub cwd: PathBuf,
    pub settings: Settings,
}

impl Context {
    pub fn new(cwd: PathBuf, settings: Settings) -> Self {
        Context { cwd, settings }
    }

    /// Resolve a command-line path against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.cwd.join(path)
    }

    /// Encoding label to pass to readers and writers
    pub fn encoding(&self) -> Option<&str> {
        Some(self.settings.encoding.as_str())
    }
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Map a failure writing command output to an error.
pub fn output_error(error: io::Error) -> FileKitError {
    FileKitError::io(error, "write output to", Path::new("<stdout>"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert_with_global_flags() {
        let cli = Cli::parse_from([
            "filekit", "--encoding", "gbk", "convert", "in.csv", "out.json", "--indent", "2",
            "--delimiter", ";", "-v",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.encoding.as_deref(), Some("gbk"));
        match cli.command {
            Some(Commands::Convert { input, output, indent, delimiter }) => {
                assert_eq!(input, PathBuf::from("in.csv"));
                assert_eq!(output, PathBuf::from("out.json"));
                assert_eq!(indent, Some(2));
                assert_eq!(delimiter, Some(';'));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_demo_default_dir() {
        let cli = Cli::parse_from(["filekit", "demo"]);
        match cli.command {
            Some(Commands::Demo { dir }) => assert_eq!(dir, PathBuf::from("examples_demo")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_context_resolve() {
        let ctx = Context::new(PathBuf::from("/work"), Settings::default());
        assert_eq!(ctx.resolve(Path::new("a.txt")), PathBuf::from("/work/a.txt"));
        assert_eq!(ctx.resolve(Path::new("/abs/b.txt")), PathBuf::from("/abs/b.txt"));
        assert_eq!(ctx.encoding(), Some("utf-8"));
    }

    #[test]
    fn test_resolve_cwd_with_override() {
        let path = PathBuf::from("/custom/path");
        assert_eq!(resolve_cwd(Some(&path)), path);
    }
}
