use crate::constants::TWO_DIGIT_YEAR_PIVOT;

/// Expands a two-digit year into a four-digit one using a fixed pivot.
///
/// Values above the pivot land in the 1900s, everything else (including the pivot
/// itself) lands in the 2000s: `51 -> 1951`, `50 -> 2050`, `5 -> 2005`.
pub fn expand_two_digit_year(two_digit_year: u16) -> u16 {
    if two_digit_year > TWO_DIGIT_YEAR_PIVOT {
        1900 + two_digit_year
    } else {
        2000 + two_digit_year
    }
}
