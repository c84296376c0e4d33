mod caption;
mod consts;
mod prelude;
mod range;
mod sample;
mod types;

pub use caption::{Caption, Piece, age_label, compose, location_note, piece_label};
pub use consts::*;
pub use range::YearRange;
pub use sample::{RandomSource, SeededRandom, choose, in_era};
pub use types::Year;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RANGE_INDICATOR: Regex =
        Regex::new(RANGE_INDICATOR_PATTERN).expect("range indicator pattern is valid");
}

/// A catalog date description, classified into one of the shapes catalogers
/// actually write. Classification is infallible; interpreting the digits can
/// fail, so [`DateExpr::resolve`] is where errors surface.
///
/// Variants are listed in the priority order they are recognized in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateExpr {
    /// Century-denominated range ending in B.C., e.g. "2nd–1st century B.C."
    BcCenturyRange { start: String, end: String },
    /// Plain year range ending in B.C., e.g. "2000–1000 B.C."
    BcYearRange { start: String, end: String },
    /// Range whose end year is taken as A.D., e.g. "1975–80" or "1000 B.C.–A.D. 1"
    AdYearRange {
        start: String,
        end: String,
        start_is_bc: bool,
    },
    /// A single century, e.g. "19th century" or "2nd century B.C."
    Century { text: String, bc: bool },
    /// A single year, e.g. "1200" or "100 B.C."
    Single { text: String, bc: bool },
}

/// Errors surfaced for date text whose boundaries cannot be interpreted.
/// Either way the date is unknown: callers skip the object rather than use
/// the range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A boundary token stripped to an empty digit string.
    #[error("no digits in date token: {0:?}")]
    NoDigits(String),
    /// A digit run too large to represent as a year.
    #[error("year value out of range: {0:?}")]
    YearOutOfRange(String),
}

impl DateExpr {
    /// Classifies a raw catalog date description.
    ///
    /// Everything after the first comma is a cataloger qualifier and is
    /// discarded before any other inspection. When the text carries more
    /// than one range indicator, the end token is the segment between the
    /// first and the second.
    pub fn classify(text: &str) -> Self {
        let text = match text.split_once(QUALIFIER_DELIMITER) {
            Some((head, _)) => head,
            None => text,
        };

        if RANGE_INDICATOR.is_match(text) {
            let mut tokens = RANGE_INDICATOR.splitn(text, 3);
            let start = tokens.next().unwrap_or_default().to_owned();
            let end = tokens.next().unwrap_or_default().to_owned();

            if has_bc_marker(&end) {
                if has_century_word(text) {
                    Self::BcCenturyRange { start, end }
                } else {
                    Self::BcYearRange { start, end }
                }
            } else {
                Self::AdYearRange {
                    start_is_bc: has_bc_marker(&start),
                    start,
                    end,
                }
            }
        } else if has_century_word(text) {
            Self::Century {
                bc: has_bc_marker(text),
                text: text.to_owned(),
            }
        } else {
            Self::Single {
                bc: has_bc_marker(text),
                text: text.to_owned(),
            }
        }
    }

    /// Resolves the classified expression to its signed year range.
    ///
    /// # Errors
    /// Returns `ParseError` when a boundary token yields no usable digits.
    pub fn resolve(&self) -> Result<YearRange, ParseError> {
        let (start, end) = match self {
            // The end token takes the end-style century offset while the
            // start token takes the start-style one. Deliberate: downstream
            // year arithmetic depends on these exact boundaries.
            Self::BcCenturyRange { start, end } => (-start_bound(start)?, -end_bound(end)?),
            Self::BcYearRange { start, end } => (-stripped_int(start)?, -stripped_int(end)?),
            Self::AdYearRange {
                start,
                end,
                start_is_bc,
            } => {
                let signed_start = if *start_is_bc {
                    -stripped_int(start)?
                } else {
                    stripped_int(start)?
                };
                let end = stripped_int(end)?;
                let end = if end < signed_start {
                    repair_abbreviated_end(signed_start, end)?
                } else {
                    end
                };
                (signed_start, end)
            }
            Self::Century { text, bc: true } => {
                let start = -start_bound(text)?;
                (start, start + CENTURY_SPAN)
            }
            Self::Century { text, bc: false } => {
                let start = start_bound(text)? - YEARS_PER_CENTURY;
                (start, start + CENTURY_SPAN)
            }
            Self::Single { text, bc } => {
                let year = stripped_int(text)?;
                let year = if *bc { -year } else { year };
                (year, year)
            }
        };
        Ok(YearRange::new(Year::new(start), Year::new(end)))
    }
}

/// Resolves a date token to the year number usable as a range start.
///
/// A token containing any non-digit character is an ordinal century
/// reference ("19th century" resolves to 1900); a purely-digit token is
/// returned unchanged. The start/end pair is deliberately asymmetric; the
/// caller combines the two differently depending on the surrounding text.
///
/// # Errors
/// Returns `ParseError` if the token yields no digits or overflows.
pub fn start_bound(token: &str) -> Result<i32, ParseError> {
    if token.contains(|c: char| !c.is_ascii_digit()) {
        let ordinal = leading_digit_run(token)?;
        ordinal
            .checked_mul(YEARS_PER_CENTURY)
            .ok_or_else(|| ParseError::YearOutOfRange(token.to_owned()))
    } else {
        stripped_int(token)
    }
}

/// Resolves a date token to the year number usable as a range end.
/// Century references resolve 99 years below their start bound ("1st century"
/// resolves to 1); purely-digit tokens are returned unchanged.
///
/// # Errors
/// Returns `ParseError` if the token yields no digits or overflows.
pub fn end_bound(token: &str) -> Result<i32, ParseError> {
    if token.contains(|c: char| !c.is_ascii_digit()) {
        let ordinal = leading_digit_run(token)?;
        ordinal
            .checked_mul(YEARS_PER_CENTURY)
            .map(|start| start - CENTURY_SPAN)
            .ok_or_else(|| ParseError::YearOutOfRange(token.to_owned()))
    } else {
        stripped_int(token)
    }
}

// --- token helpers ---

fn has_bc_marker(text: &str) -> bool {
    text.to_ascii_lowercase().contains(BC_MARKER)
}

fn has_century_word(text: &str) -> bool {
    text.to_ascii_lowercase().contains(CENTURY_STEM)
}

/// Integer value of every ASCII digit in the token, concatenated in order
fn stripped_int(token: &str) -> Result<i32, ParseError> {
    let digits: String = token.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(ParseError::NoDigits(token.to_owned()));
    }
    digits
        .parse()
        .map_err(|_| ParseError::YearOutOfRange(digits.clone()))
}

/// Integer value of the first maximal run of ASCII digits in the token
fn leading_digit_run(token: &str) -> Result<i32, ParseError> {
    let run: String = token
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    if run.is_empty() {
        return Err(ParseError::NoDigits(token.to_owned()));
    }
    run.parse()
        .map_err(|_| ParseError::YearOutOfRange(run.clone()))
}

/// Rebuilds an end year written as a suffix of the start year's digits:
/// 1975–80 means 1975–1980. The missing leading digits are borrowed from the
/// start year's decimal representation.
fn repair_abbreviated_end(start: i32, end: i32) -> Result<i32, ParseError> {
    let start_digits = start.to_string();
    let end_digits = end.to_string();
    let borrowed = start_digits.len().saturating_sub(end_digits.len());
    let mut repaired: String = start_digits.chars().take(borrowed).collect();
    repaired.push_str(&end_digits);
    repaired
        .parse()
        .map_err(|_| ParseError::YearOutOfRange(repaired.clone()))
}

/// Interprets a raw catalog date description as a signed year range.
/// An absent input is propagated unchanged, never treated as an error.
///
/// # Errors
/// Returns `ParseError` when the text is present but no boundary can be
/// interpreted; callers should treat the date as unknown and skip the object.
pub fn parse_date(text: Option<&str>) -> Result<Option<YearRange>, ParseError> {
    text.map(|raw| raw.parse()).transpose()
}

/// Renders a year range back into its canonical B.C./A.D. display string.
/// An absent range is propagated unchanged.
pub fn format_date_range(range: Option<YearRange>) -> Option<String> {
    range.map(|r| r.to_string())
}
