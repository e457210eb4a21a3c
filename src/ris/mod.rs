//! RIS reader.
//!
//! Reads one RIS file into one [`Record`]. Only a fixed set of tags is
//! recognized; other lines are counted and optionally reported.
//!
//! # Example
//!
//! ```
//! use ris2bib::{RecordParser, RisReader};
//! use ris2bib::record::Field;
//!
//! let input = "TY  - JOUR
//! TI  - Example Title
//! AU  - Smith, John
//! PY  - 2020
//! ER  -";
//!
//! let record = RisReader::new().parse(input).unwrap();
//! assert_eq!(record.get(Field::Title), Some("Example Title"));
//! assert_eq!(record.authors, vec!["Smith, John"]);
//! assert_eq!(record.unparsed_lines(), 2);
//! ```

mod parse;
pub mod tags;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::record::Record;
use crate::{ConvertError, RecordParser, Result};
use parse::ris_parse;

/// Diagnostic switches for the reader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Report every unparsed line as it is seen.
    pub verbose: bool,
    /// Do not report the per-file count of unparsed lines.
    pub quiet: bool,
}

/// Reader for RIS formatted files.
#[derive(Debug, Clone, Default)]
pub struct RisReader {
    config: ReaderConfig,
}

impl RisReader {
    /// Creates a new RIS reader with default diagnostics.
    ///
    /// # Examples
    ///
    /// ```
    /// use ris2bib::RisReader;
    /// let reader = RisReader::new();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Reads the RIS file at `path` into a record.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Io`] if the file cannot be opened or read, and
    /// [`ConvertError::MalformedDate`] for a `DA` value that is not
    /// `year/month/day`.
    pub fn read_path(&self, path: &Path) -> Result<Record> {
        debug!(path = %path.display(), "Reading RIS file");
        let file = File::open(path).map_err(|e| ConvertError::io(path, e))?;
        ris_parse(BufReader::new(file), path, &self.config)
    }
}

impl RecordParser for RisReader {
    fn parse(&self, input: &str) -> Result<Record> {
        ris_parse(input.as_bytes(), Path::new("<input>"), &self.config)
    }
}
