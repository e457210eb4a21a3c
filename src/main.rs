//! CLI entry point for the ris2bib converter.

use anyhow::{Context, Result};
use clap::Parser;
use ris2bib::{ReaderConfig, WriteMode, convert, default_outfile};
use tracing::debug;

mod cli;

use cli::Args;

fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // RUST_LOG overrides the default level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    debug!(?args, "CLI arguments parsed");

    let outfile = match &args.outfile {
        Some(path) => path.clone(),
        // clap guarantees at least one input
        None => default_outfile(&args.inputs[0]),
    };

    let config = ReaderConfig {
        verbose: args.verbose,
        quiet: args.quiet,
    };
    let mode = if args.overwrite {
        WriteMode::Truncate
    } else {
        WriteMode::Append
    };

    convert(&args.inputs, &outfile, config, mode)
        .with_context(|| format!("failed to convert into {}", outfile.display()))?;

    Ok(())
}
