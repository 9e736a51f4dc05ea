//! Filekit CLI - Read, write, convert and inspect text, JSON, CSV and YAML files

use std::io::{self, Write};

use clap::Parser;
use filekit::cli::{commands, output_error, resolve_cwd, Cli, Commands, Context};
use filekit::config::load_settings;
use filekit::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over the verbosity flags
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> filekit::Result<()> {
    let cwd = resolve_cwd(cli.cwd.as_deref());
    let mut settings = load_settings(&cwd)?;
    if let Some(encoding) = cli.encoding {
        settings.encoding = encoding;
    }
    let ctx = Context::new(cwd, settings);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match cli.command {
        Some(Commands::Cat { path }) => commands::cat::run(&ctx, &path, &mut out),
        Some(Commands::Lines { path }) => commands::lines::run(&ctx, &path, &mut out),
        Some(Commands::Ls { dir, ext, json }) => {
            commands::ls::run(&ctx, &dir, ext.as_deref(), json, &mut out)
        }
        Some(Commands::Info { path, json }) => commands::info::run(&ctx, &path, json, &mut out),
        Some(Commands::Convert {
            input,
            output,
            indent,
            delimiter,
        }) => commands::convert::run(&ctx, &input, &output, indent, delimiter, &mut out),
        Some(Commands::Demo { dir }) => commands::demo::run(&ctx, &dir, &mut out),
        None => writeln!(out, "Use --help for usage information").map_err(output_error),
    };
    out.flush().map_err(output_error)?;
    result
}
