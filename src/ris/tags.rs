//! RIS tags recognized by the reader and what each one does to a record.
//!
//! See: http://en.wikipedia.org/wiki/RIS_(file_format)

use crate::record::Field;

/// RIS tags the reader understands.
///
/// Every other tag (`TY`, `ER`, `AB`, ...) is counted as an unparsed line.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub enum RisTag {
    /// PY - Publication year
    PublicationYear,
    /// AU - Author
    Author,
    /// VL - Volume number
    Volume,
    /// TI - Primary title
    Title,
    /// T1 - Primary title (alternative)
    TitleAlternative,
    /// JA - Journal/Periodical name: standard abbreviation
    JournalAbbreviation,
    /// JO - Journal/Periodical name: full format (alternative)
    JournalFullAlternative,
    /// IS - Issue number
    Issue,
    /// SP - Start page
    StartPage,
    /// EP - End page
    EndPage,
    /// UR - Web/URL
    Url,
    /// DO - DOI
    Doi,
    /// ID - Reference ID
    ReferenceId,
    /// SN - ISSN/ISBN
    SerialNumber,
    /// DA - Date in `year/month/day` form
    Date,
}

/// What a matched tag does to the record being built.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum TagAction {
    /// Set a scalar field, replacing any earlier value.
    Set(Field),
    /// Append to the author list.
    AppendAuthor,
    /// Split the value on `/` into year, month and day.
    SplitDate,
}

/// Recognized tags in matching priority order. The first tag that prefixes a
/// line wins.
pub const TAG_PRIORITY: [RisTag; 15] = [
    RisTag::PublicationYear,
    RisTag::Author,
    RisTag::Volume,
    RisTag::Title,
    RisTag::TitleAlternative,
    RisTag::JournalAbbreviation,
    RisTag::JournalFullAlternative,
    RisTag::Issue,
    RisTag::StartPage,
    RisTag::EndPage,
    RisTag::Url,
    RisTag::Doi,
    RisTag::ReferenceId,
    RisTag::SerialNumber,
    RisTag::Date,
];

impl RisTag {
    /// Finds the recognized tag a line starts with, if any.
    pub fn match_line(line: &str) -> Option<Self> {
        TAG_PRIORITY
            .into_iter()
            .find(|tag| line.starts_with(tag.as_tag()))
    }

    /// Convert a RisTag enum back to its string representation.
    pub fn as_tag(&self) -> &'static str {
        match self {
            RisTag::PublicationYear => "PY",
            RisTag::Author => "AU",
            RisTag::Volume => "VL",
            RisTag::Title => "TI",
            RisTag::TitleAlternative => "T1",
            RisTag::JournalAbbreviation => "JA",
            RisTag::JournalFullAlternative => "JO",
            RisTag::Issue => "IS",
            RisTag::StartPage => "SP",
            RisTag::EndPage => "EP",
            RisTag::Url => "UR",
            RisTag::Doi => "DO",
            RisTag::ReferenceId => "ID",
            RisTag::SerialNumber => "SN",
            RisTag::Date => "DA",
        }
    }

    pub fn action(&self) -> TagAction {
        match self {
            RisTag::PublicationYear => TagAction::Set(Field::Year),
            RisTag::Author => TagAction::AppendAuthor,
            RisTag::Volume => TagAction::Set(Field::Volume),
            RisTag::Title | RisTag::TitleAlternative => TagAction::Set(Field::Title),
            RisTag::JournalAbbreviation | RisTag::JournalFullAlternative => {
                TagAction::Set(Field::Journal)
            }
            RisTag::Issue => TagAction::Set(Field::Number),
            RisTag::StartPage => TagAction::Set(Field::StartPage),
            RisTag::EndPage => TagAction::Set(Field::EndPage),
            RisTag::Url => TagAction::Set(Field::Url),
            RisTag::Doi => TagAction::Set(Field::Doi),
            RisTag::ReferenceId => TagAction::Set(Field::Id),
            RisTag::SerialNumber => TagAction::Set(Field::Issn),
            RisTag::Date => TagAction::SplitDate,
        }
    }
}
