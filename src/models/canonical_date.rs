use crate::constants::{MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_MONTH, MIN_YEAR};
use std::fmt;

/// A range-validated calendar date.
///
/// Ordering is lexicographic over `(year, month, day)`, which is why the fields are
/// declared in that order and the comparison traits are derived.
///
/// The day is only checked against the generic `1..=31` bound, so dates such as
/// February 30th are representable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalDate {
    year: u16,
    month: u8,
    day: u8,
}

impl CanonicalDate {
    /// Creates a date from its components, returning `None` if any component is out of range.
    ///
    /// Checks are applied in the order month, day, year.
    pub fn new(month: u8, day: u8, year: u16) -> Option<Self> {
        if !(MIN_MONTH..=MAX_MONTH).contains(&month) {
            return None;
        }

        if !(MIN_DAY..=MAX_DAY).contains(&day) {
            return None;
        }

        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }

        Some(Self { year, month, day })
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn year(&self) -> u16 {
        self.year
    }
}

/// Formats the date in its canonical `MM/DD/YYYY` form.
impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.month, self.day, self.year)
    }
}
