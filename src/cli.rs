//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Convert RIS bibliographic records into BibTeX entries.
///
/// Every input file is read as one record. All records are appended to a
/// single BibTeX file.
#[derive(Parser, Debug)]
#[command(name = "ris2bib")]
#[command(author, version, about)]
pub struct Args {
    /// Show each unused line
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not report the number of unused lines
    #[arg(short, long)]
    pub quiet: bool,

    /// File to write to [default: first input with .bib extension]
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,

    /// Overwrite the output file instead of appending to it. Use with care
    #[arg(short = 'w', long)]
    pub overwrite: bool,

    /// RIS files to convert
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}
