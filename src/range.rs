use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{DateExpr, EN_DASH, ParseError, Year};

/// An inclusive range of signed years, the normal form of a catalog date.
///
/// Under normal inputs `start <= end`. Genuinely malformed source text can
/// leave the range inverted even after end-year repair; that residue is
/// surfaced as-is rather than rejected, and [`YearRange::is_inverted`] is the
/// caller's data-quality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRange {
    start: Year,
    end: Year,
}

impl YearRange {
    /// Creates a new year range. No ordering validation is performed; see
    /// the type-level note on inverted ranges.
    pub const fn new(start: Year, end: Year) -> Self {
        Self { start, end }
    }

    /// Convenience constructor from raw signed year numbers
    pub const fn from_years(start: i32, end: i32) -> Self {
        Self::new(Year::new(start), Year::new(end))
    }

    /// Returns the first year of the range
    pub const fn start(&self) -> Year {
        self.start
    }

    /// Returns the last year of the range
    pub const fn end(&self) -> Year {
        self.end
    }

    /// True when the range covers exactly one year
    pub const fn is_single_year(&self) -> bool {
        self.start.get() == self.end.get()
    }

    /// True when `start > end`. A data-quality signal from malformed source
    /// text; such a range should not be used for arithmetic or display.
    pub const fn is_inverted(&self) -> bool {
        self.start.get() > self.end.get()
    }

    /// Checks if the range contains a given year
    pub const fn contains_year(&self, year: Year) -> bool {
        self.start.get() <= year.get() && year.get() <= self.end.get()
    }

    /// Checks if this range overlaps with another range
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start.get() <= other.end.get() && other.start.get() <= self.end.get()
    }

    /// Checks if this range is completely contained within another range
    pub const fn is_within(&self, other: &Self) -> bool {
        other.start.get() <= self.start.get() && self.end.get() <= other.end.get()
    }
}

impl fmt::Display for YearRange {
    /// Canonical display form: single years as "N B.C." / "A.D. N", ranges
    /// joined by an en-dash with the era marker written once per side of the
    /// epoch. The en-dash is a display contract, not cosmetics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = (self.start, self.end);
        if start == end {
            if start.is_bc() {
                write!(f, "{} B.C.", start.magnitude())
            } else {
                write!(f, "A.D. {start}")
            }
        } else if start.is_bc() && end.is_bc() {
            write!(f, "{}{EN_DASH}{} B.C.", start.magnitude(), end.magnitude())
        } else if start.is_bc() {
            write!(f, "{} B.C.{EN_DASH}A.D. {end}", start.magnitude())
        } else {
            write!(f, "A.D. {start}{EN_DASH}{end}")
        }
    }
}

impl FromStr for YearRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateExpr::classify(s).resolve()
    }
}

impl PartialOrd for YearRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for YearRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start years first, then end years
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for YearRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
