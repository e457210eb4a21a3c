//! Convert RIS bibliographic records into BibTeX entries.
//!
//! The conversion is a two-step pipeline:
//!
//! - [`RisReader`] reads one RIS file into one [`Record`].
//! - [`BibtexWriter`] appends every record as an `@ARTICLE` entry to a single
//!   output file.
//!
//! # Basic Usage
//!
//! ```rust
//! use ris2bib::{RecordParser, RisReader};
//! use ris2bib::bibtex::citation_key;
//!
//! let input = r#"TY  - JOUR
//! TI  - Example Article
//! AU  - Smith, John
//! PY  - 2020
//! ER  -"#;
//!
//! let record = RisReader::new().parse(input).unwrap();
//! assert_eq!(citation_key(&record).unwrap(), "Smith2020");
//! ```
//!
//! # Converting files
//!
//! ```no_run
//! use std::path::{Path, PathBuf};
//! use ris2bib::{ReaderConfig, WriteMode, convert};
//!
//! let inputs = vec![PathBuf::from("a.ris"), PathBuf::from("b.ris")];
//! let written = convert(&inputs, Path::new("refs.bib"), ReaderConfig::default(), WriteMode::Append)?;
//! println!("wrote {written} entries");
//! # Ok::<(), ris2bib::ConvertError>(())
//! ```
//!
//! # Error Handling
//!
//! Every fallible operation returns [`Result`], which wraps [`ConvertError`].
//! Nothing is retried; the first error ends the conversion.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

pub mod bibtex;
pub mod record;
pub mod ris;

// Reexports
pub use bibtex::{BibtexWriter, WriteMode};
pub use record::{Field, Record};
pub use ris::{ReaderConfig, RisReader};

/// A specialized Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur while reading RIS input or writing BibTeX output.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed DA value at line {line}: '{value}' is not year/month/day")]
    MalformedDate { line: usize, value: String },

    #[error("cannot derive a citation key: record has neither an id nor an author")]
    MissingAuthor,

    #[error("cannot derive a citation key: author '{author}' has no comma")]
    MalformedAuthor { author: String },
}

impl ConvertError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        ConvertError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Trait for implementing record parsers.
pub trait RecordParser {
    /// Parse a string holding one bibliographic record.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError` if the input is malformed
    fn parse(&self, input: &str) -> Result<Record>;
}

/// Reads every input in order and writes all records to `outfile`.
///
/// Returns the number of entries written.
///
/// # Errors
///
/// Stops at the first read or write error. Entries already written stay in
/// `outfile`.
pub fn convert(
    inputs: &[PathBuf],
    outfile: &Path,
    config: ReaderConfig,
    mode: WriteMode,
) -> Result<usize> {
    let reader = RisReader::with_config(config);
    let records = inputs
        .iter()
        .map(|path| reader.read_path(path))
        .collect::<Result<Vec<_>>>()?;

    let written = BibtexWriter::with_mode(mode).write_path(records, outfile)?;
    info!("Wrote {} entries to {}", written, outfile.display());
    Ok(written)
}

/// The default output path: `input` with its extension replaced by `.bib`.
pub fn default_outfile(input: &Path) -> PathBuf {
    input.with_extension("bib")
}
