use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A signed calendar year: positive values are Anno Domini, negative values
/// are Before Christ, with "1 B.C." stored as `-1`. No year zero is modeled.
///
/// Unlike a validated date type there is no magnitude limit here: malformed
/// catalog text must surface as-is so callers can detect it, not be rejected
/// at construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[display(fmt = "{}", _0)]
#[serde(from = "i32", into = "i32")]
pub struct Year(i32);

impl Year {
    /// Creates a new Year from a signed year number
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the signed year value
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// True for Before Christ years (negative values)
    #[inline]
    pub const fn is_bc(self) -> bool {
        self.0 < 0
    }

    /// Unsigned year number, as written next to a B.C./A.D. marker
    #[inline]
    pub const fn magnitude(self) -> i32 {
        self.0.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_and_get() {
        assert_eq!(Year::new(1975).get(), 1975);
        assert_eq!(Year::new(-100).get(), -100);
        assert_eq!(Year::new(0).get(), 0);
    }

    #[test]
    fn test_year_era() {
        assert!(Year::new(-1).is_bc());
        assert!(!Year::new(1).is_bc());
        // year zero is not modeled, but a zero value still reads as A.D.
        assert!(!Year::new(0).is_bc());
    }

    #[test]
    fn test_year_magnitude() {
        assert_eq!(Year::new(-200).magnitude(), 200);
        assert_eq!(Year::new(1899).magnitude(), 1899);
    }

    #[test]
    fn test_year_display() {
        assert_eq!(Year::new(1975).to_string(), "1975");
        assert_eq!(Year::new(-100).to_string(), "-100");
    }

    #[test]
    fn test_year_from_into() {
        let year: Year = 1975.into();
        assert_eq!(year.get(), 1975);

        let value: i32 = Year::new(-44).into();
        assert_eq!(value, -44);
    }

    #[test]
    fn test_year_ordering() {
        let bc = Year::new(-100);
        let ad = Year::new(100);
        assert!(bc < ad);
        assert!(Year::new(-200) < Year::new(-101));
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(-100);
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "-100");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);
    }
}
