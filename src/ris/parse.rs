//! RIS format parsing implementation.
//!
//! This module turns the lines of one RIS file into a single [`Record`].

use std::io::{BufRead, Read};
use std::path::Path;

use tracing::{info, warn};

use crate::record::{Field, Record};
use crate::ris::ReaderConfig;
use crate::ris::tags::{RisTag, TagAction};
use crate::{ConvertError, Result};

/// Parse every line from `reader` into one record.
///
/// `source` names the input in diagnostics and I/O errors.
pub(crate) fn ris_parse<R: BufRead>(
    mut reader: R,
    source: &Path,
    config: &ReaderConfig,
) -> Result<Record> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| ConvertError::io(source, e))?;

    let mut record = Record::new();
    for (index, line) in split_lines(&text).enumerate() {
        apply_line(&mut record, line, index + 1, config)?;
    }

    let unparsed = record.unparsed_lines();
    if unparsed > 0 && !config.quiet {
        warn!("{} unparsed lines in file {}.", unparsed, source.display());
    }

    Ok(record)
}

/// Split text into lines ending in `\n`, `\r\n` or a lone `\r`.
///
/// A break at the very end of the text does not start another line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    body.split('\n')
        .filter(move |_| !text.is_empty())
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

/// Apply one line to the record being built.
fn apply_line(
    record: &mut Record,
    line: &str,
    line_number: usize,
    config: &ReaderConfig,
) -> Result<()> {
    let Some(tag) = RisTag::match_line(line) else {
        record.count_unparsed();
        if config.verbose {
            info!("Unparsed line: {}", line);
        }
        return Ok(());
    };

    let value = extract_value(line);
    match tag.action() {
        TagAction::Set(field) => record.set(field, value),
        TagAction::AppendAuthor => record.add_author(value),
        TagAction::SplitDate => {
            let (year, month, day) = split_date(value, line_number)?;
            record.set(Field::Year, year);
            record.set(Field::Month, month);
            record.set(Field::Day, day);
        }
    }
    Ok(())
}

/// Everything after the first `-`, trimmed. Empty when the line has no `-`.
fn extract_value(line: &str) -> &str {
    line.split_once('-').map_or("", |(_, value)| value.trim())
}

/// Split a `DA` value into exactly three `/`-separated parts.
fn split_date(value: &str, line_number: usize) -> Result<(&str, &str, &str)> {
    let mut parts = value.split('/');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day), None) => Ok((year, month, day)),
        _ => Err(ConvertError::MalformedDate {
            line: line_number,
            value: value.to_string(),
        }),
    }
}
