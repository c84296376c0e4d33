use serde::{Deserialize, Serialize};

use crate::{ParseError, YearRange, parse_date};

/// One exhibited object as extracted from a catalog listing. The HTML
/// extractor collaborator supplies every field as already-trimmed plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub title: String,
    /// Raw date text as printed in the catalog; absent when the field is
    /// missing from the listing
    pub date: Option<String>,
    #[serde(default)]
    pub culture: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub gallery: String,
}

impl Piece {
    /// Interprets the piece's raw date text as a year range.
    ///
    /// # Errors
    /// Returns `ParseError` when the date text is present but cannot be
    /// interpreted; the piece should then be skipped, not posted.
    pub fn date_range(&self) -> Result<Option<YearRange>, ParseError> {
        parse_date(self.date.as_deref())
    }
}

/// The assembled caption strings for one posted object: the status text, the
/// image alt text, and the age headline drawn onto the composed image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caption {
    /// Age headline, e.g. "226 years" or "46-51 years"
    pub age: String,
    /// Status text: title, date, culture, medium
    pub label: String,
    /// Alt text locating the object in the collection
    pub note: String,
}

/// How long ago the range lies, measured from the caller-supplied current
/// year. A single-year range yields "N years"; otherwise the end-to-start
/// span "N-M years". Not meaningful for inverted ranges.
pub fn age_label(range: YearRange, current_year: i32) -> String {
    if range.is_single_year() {
        format!("{} years", current_year - range.start().get())
    } else {
        format!(
            "{}-{} years",
            current_year - range.end().get(),
            current_year - range.start().get()
        )
    }
}

/// Object label: title, date string, culture, medium joined by single
/// spaces. Empty fields keep their separator so the template stays aligned
/// with the catalog listing order.
pub fn piece_label(piece: &Piece, date_string: &str) -> String {
    format!(
        "{} {} {} {}",
        piece.title, date_string, piece.culture, piece.medium
    )
}

/// Alt-text note locating the object: the collection name is supplied by the
/// caller rather than baked in.
pub fn location_note(label: &str, collection: &str, gallery: &str) -> String {
    format!("you're in luck because {label} can be found in {collection}'s {gallery}")
}

/// Assembles the full caption for a piece whose date range has already been
/// interpreted and checked by the caller.
pub fn compose(piece: &Piece, range: YearRange, current_year: i32, collection: &str) -> Caption {
    let label = piece_label(piece, &range.to_string());
    let note = location_note(&label, collection, &piece.gallery);
    Caption {
        age: age_label(range, current_year),
        label,
        note,
    }
}
