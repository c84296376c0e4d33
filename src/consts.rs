/// Number of years in a century
pub const YEARS_PER_CENTURY: i32 = 100;

/// Inclusive offset from a century's first year to its last
pub const CENTURY_SPAN: i32 = YEARS_PER_CENTURY - 1;

/// Marker identifying a Before Christ date, matched case-insensitively.
/// The periods are required; bare "BC" never appears in the catalog.
pub const BC_MARKER: &str = "b.c.";

/// Stem matching both "century" and "centuries", case-insensitively
pub const CENTURY_STEM: &str = "centur";

/// Range indicator: hyphen/en-dash/em-dash with optional single surrounding
/// spaces, or the words " or " / " to " (case-insensitive)
pub const RANGE_INDICATOR_PATTERN: &str = r"(?i) ?[-–—] ?| or | to ";

/// Catalogers append qualifiers after a comma; everything past the first one
/// is discarded before range extraction
pub const QUALIFIER_DELIMITER: char = ',';

/// Required separator in all multi-year display output (never a hyphen)
pub const EN_DASH: char = '–';
