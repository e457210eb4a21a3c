//! The in-memory form of one bibliographic entry.
//!
//! A [`Record`] keeps its scalar fields as an ordered list of `(Field, value)`
//! pairs. The order is the order in which fields were first set while reading
//! the RIS file, and it is the order in which the BibTeX writer emits them.

use std::fmt;

/// Field names a [`Record`] can hold, spelled as they appear in BibTeX output.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Field {
    Year,
    Month,
    Day,
    Volume,
    Title,
    Journal,
    Number,
    StartPage,
    EndPage,
    /// Synthesized from `startpage` and `endpage` when both are present.
    Pages,
    Url,
    Doi,
    Id,
    Issn,
}

impl Field {
    /// The field name written to the BibTeX entry.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::Volume => "volume",
            Field::Title => "title",
            Field::Journal => "journal",
            Field::Number => "number",
            Field::StartPage => "startpage",
            Field::EndPage => "endpage",
            Field::Pages => "pages",
            Field::Url => "url",
            Field::Doi => "doi",
            Field::Id => "id",
            Field::Issn => "issn",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One bibliographic entry read from a single RIS file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Authors in order of appearance. Duplicates are kept.
    pub authors: Vec<String>,
    fields: Vec<(Field, String)>,
    unparsed_lines: usize,
}

impl Record {
    /// Creates an empty record with no authors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a scalar field. A field that is already present keeps its
    /// position and takes the new value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(f, _)| *f == field) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((field, value)),
        }
    }

    /// Appends an author.
    pub fn add_author(&mut self, author: impl Into<String>) {
        self.authors.push(author.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: Field) -> Option<String> {
        let index = self.fields.iter().position(|(f, _)| *f == field)?;
        Some(self.fields.remove(index).1)
    }

    /// Scalar fields in output order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Number of lines in the source file that matched no recognized tag.
    pub fn unparsed_lines(&self) -> usize {
        self.unparsed_lines
    }

    pub(crate) fn count_unparsed(&mut self) {
        self.unparsed_lines += 1;
    }

    /// Replaces `startpage` and `endpage` with a single `pages` field of the
    /// form `start-end`, placed where `startpage` was.
    ///
    /// Nothing changes unless both page fields are present.
    pub fn merge_pages(&mut self) {
        let Some(end) = self.get(Field::EndPage).map(str::to_owned) else {
            return;
        };
        let Some(slot) = self.fields.iter_mut().find(|(f, _)| *f == Field::StartPage) else {
            return;
        };
        slot.0 = Field::Pages;
        slot.1 = format!("{}-{}", slot.1, end);
        self.remove(Field::EndPage);
    }
}
