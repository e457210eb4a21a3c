//! BibTeX writer.
//!
//! Renders records as `@ARTICLE` entries and appends them to an output file.
//!
//! # Example
//!
//! ```
//! use ris2bib::{RecordParser, RisReader};
//! use ris2bib::bibtex::format_entry;
//!
//! let record = RisReader::new()
//!     .parse("AU  - Doe, Jane\nPY  - 2021\nSP  - 10\nEP  - 20")
//!     .unwrap();
//! let entry = format_entry(record).unwrap();
//! assert_eq!(
//!     entry,
//!     "@ARTICLE{Doe2021,\n\tauthor=\t{Doe, Jane},\n\tyear=\t{2021},\n\tpages=\t{10-20},"
//! );
//! ```

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use itertools::Itertools;
use tracing::debug;

use crate::record::{Field, Record};
use crate::{ConvertError, Result};

/// Written once after the last entry, whatever the number of entries.
pub const TERMINATOR: &str = "\n}\n";

/// How the output file is opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Keep existing content and add to the end.
    #[default]
    Append,
    /// Discard existing content first.
    Truncate,
}

/// Writer for BibTeX output files.
#[derive(Debug, Clone, Default)]
pub struct BibtexWriter {
    mode: WriteMode,
}

impl BibtexWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mode(mode: WriteMode) -> Self {
        Self { mode }
    }

    /// Writes every record to `path`, followed by [`TERMINATOR`], and returns
    /// the number of entries written. The file is created if it is missing.
    ///
    /// Entries written before a failing record stay in the file.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Io`] if the file cannot be opened or written,
    /// and the errors of [`citation_key`] for a record without a usable key.
    pub fn write_path<I>(&self, records: I, path: &Path) -> Result<usize>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut options = OpenOptions::new();
        match self.mode {
            WriteMode::Append => options.append(true),
            WriteMode::Truncate => options.write(true).truncate(true),
        };
        let file = options
            .create(true)
            .open(path)
            .map_err(|e| ConvertError::io(path, e))?;
        let mut out = BufWriter::new(file);

        let mut written = 0;
        for record in records {
            let entry = format_entry(record)?;
            out.write_all(entry.as_bytes())
                .map_err(|e| ConvertError::io(path, e))?;
            written += 1;
        }
        out.write_all(TERMINATOR.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| ConvertError::io(path, e))?;

        debug!(path = %path.display(), entries = written, mode = ?self.mode, "Wrote BibTeX file");
        Ok(written)
    }
}

/// Derives the citation key of a record.
///
/// The `id` field is used as is when present. Otherwise the key is the first
/// author's surname (the text before the first comma) followed by the year,
/// if there is one.
///
/// # Errors
///
/// [`ConvertError::MissingAuthor`] when there is neither an `id` nor an
/// author, [`ConvertError::MalformedAuthor`] when the first author has no comma.
pub fn citation_key(record: &Record) -> Result<String> {
    if let Some(id) = record.get(Field::Id) {
        return Ok(id.to_string());
    }

    let first = record.authors.first().ok_or(ConvertError::MissingAuthor)?;
    let (surname, _) = first
        .split_once(',')
        .ok_or_else(|| ConvertError::MalformedAuthor {
            author: first.clone(),
        })?;
    let year = record.get(Field::Year).unwrap_or_default();
    Ok(format!("{surname}{year}"))
}

/// Renders one record as an `@ARTICLE` entry, without the closing brace.
///
/// The page fields are merged first; see [`Record::merge_pages`].
pub fn format_entry(mut record: Record) -> Result<String> {
    record.merge_pages();
    let key = citation_key(&record)?;

    let fields = record.fields().format_with("", |(field, value), f| {
        f(&format_args!("\n\t{field}=\t{{{value}}},"))
    });
    Ok(format!(
        "@ARTICLE{{{},\n\tauthor=\t{{{}}},{}",
        key,
        record.authors.iter().join(" and "),
        fields
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::fs;

    fn record(authors: &[&str], fields: &[(Field, &str)]) -> Record {
        let mut record = Record::new();
        for author in authors {
            record.add_author(*author);
        }
        for (field, value) in fields {
            record.set(*field, *value);
        }
        record
    }

    #[rstest]
    #[case(&["Smith, J."], &[(Field::Year, "2020")], "Smith2020")]
    #[case(&["Smith, J."], &[], "Smith")]
    #[case(&["Doe, Jane", "Smith, J."], &[(Field::Year, "2021")], "Doe2021")]
    #[case(&["van der Berg, A, B"], &[(Field::Year, "1999")], "van der Berg1999")]
    #[case(&["No Comma"], &[(Field::Id, "given-key")], "given-key")]
    #[case(&[], &[(Field::Id, "lonely")], "lonely")]
    fn test_citation_key(
        #[case] authors: &[&str],
        #[case] fields: &[(Field, &str)],
        #[case] expected: &str,
    ) {
        assert_eq!(citation_key(&record(authors, fields)).unwrap(), expected);
    }

    #[test]
    fn test_citation_key_without_comma() {
        let err = citation_key(&record(&["Plato"], &[])).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedAuthor { author } if author == "Plato"));
    }

    #[test]
    fn test_citation_key_without_authors() {
        let err = citation_key(&Record::new()).unwrap_err();
        assert!(matches!(err, ConvertError::MissingAuthor));
    }

    #[test]
    fn test_format_entry_field_order() {
        let entry = format_entry(record(
            &["Doe, Jane", "Roe, R."],
            &[
                (Field::Year, "2021"),
                (Field::Title, "A Study"),
                (Field::StartPage, "10"),
                (Field::EndPage, "20"),
                (Field::Id, "key1"),
            ],
        ))
        .unwrap();
        assert_eq!(
            entry,
            "@ARTICLE{key1,\n\tauthor=\t{Doe, Jane and Roe, R.},\n\tyear=\t{2021},\n\ttitle=\t{A Study},\n\tpages=\t{10-20},\n\tid=\t{key1},"
        );
    }

    #[test]
    fn test_format_entry_lone_startpage() {
        let entry = format_entry(record(&["Doe, J"], &[(Field::StartPage, "5")])).unwrap();
        assert!(entry.contains("\n\tstartpage=\t{5},"));
        assert!(!entry.contains("pages=\t{5-"));
    }

    #[test]
    fn test_format_entry_without_authors() {
        let entry = format_entry(record(&[], &[(Field::Id, "x")])).unwrap();
        assert!(entry.starts_with("@ARTICLE{x,\n\tauthor=\t{},"));
    }

    #[test]
    fn test_write_path_single_terminator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bib");
        let records = vec![
            record(&["Smith, J."], &[(Field::Year, "2020")]),
            record(&["Doe, Jane"], &[(Field::Year, "2021")]),
        ];

        let written = BibtexWriter::new().write_path(records, &path).unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "@ARTICLE{Smith2020,\n\tauthor=\t{Smith, J.},\n\tyear=\t{2020},@ARTICLE{Doe2021,\n\tauthor=\t{Doe, Jane},\n\tyear=\t{2021},\n}\n"
        );
    }

    #[test]
    fn test_write_path_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bib");
        let writer = BibtexWriter::new();

        writer.write_path(vec![record(&["A, B"], &[])], &path).unwrap();
        writer.write_path(vec![record(&["C, D"], &[])], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("@ARTICLE{").count(), 2);
        assert_eq!(contents.matches(TERMINATOR).count(), 2);
        assert!(contents.ends_with("{C, D},\n}\n"));
    }

    #[test]
    fn test_write_path_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bib");
        fs::write(&path, "stale content that is longer than the new output\n".repeat(10)).unwrap();

        BibtexWriter::with_mode(WriteMode::Truncate)
            .write_path(vec![record(&["A, B"], &[])], &path)
            .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "@ARTICLE{A,\n\tauthor=\t{A, B},\n}\n"
        );
    }

    #[test]
    fn test_write_path_keeps_entries_before_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bib");
        let records = vec![record(&["Good, A"], &[]), record(&["Bad"], &[])];

        let err = BibtexWriter::new().write_path(records, &path).unwrap_err();

        assert!(matches!(err, ConvertError::MalformedAuthor { .. }));
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "@ARTICLE{Good,\n\tauthor=\t{Good, A},");
    }

    #[test]
    fn test_write_path_unwritable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.bib");
        let err = BibtexWriter::new()
            .write_path(Vec::new(), &path)
            .unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
    }
}
