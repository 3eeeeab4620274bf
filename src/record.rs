//! Scraped record types
//!
//! One `FilmRecord` is produced per listing-table row. The description field
//! starts as a reference to the film's detail page and is resolved to the
//! fetched synopsis text exactly once during enrichment.

/// Description field of a film record
///
/// The two states make the enrichment transition explicit: a record leaves
/// the row parser as `DetailPage` and must be `Text` before export. The
/// export sink refuses `DetailPage`, so a raw URL can never appear in the
/// output workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    /// Relative URL of the detail page the synopsis has not been fetched from yet
    DetailPage(String),

    /// Resolved synopsis text
    Text(String),
}

impl Description {
    /// Returns true once the synopsis text has been resolved
    pub fn is_resolved(&self) -> bool {
        matches!(self, Description::Text(_))
    }

    /// Returns the resolved synopsis text, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Description::Text(text) => Some(text),
            Description::DetailPage(_) => None,
        }
    }

    /// Returns the pending detail-page path, if any
    pub fn detail_path(&self) -> Option<&str> {
        match self {
            Description::DetailPage(path) => Some(path),
            Description::Text(_) => None,
        }
    }
}

/// One scraped film registration entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmRecord {
    /// Four-digit year derived from the listing page path
    pub release_year: String,

    /// Film name, trimmed
    pub film_name: String,

    /// Publishing entity, extracted from the row's script fragment
    pub publisher: String,

    /// Director; `None` when the source row omits the field
    pub director: Option<String>,

    /// Registration place, trimmed
    pub registration_place: String,

    /// Synopsis, resolved during enrichment
    pub description: Description,
}
