use crate::constants::DATE_SEPARATOR;
use crate::models::CanonicalDate;
use crate::utils::expand_two_digit_year;

/// Parses a loosely formatted `month/day/year` string into a `CanonicalDate`.
///
/// Accepts one or two digit months and days, and two or four digit years. Two-digit
/// years are expanded with a fixed pivot (see `expand_two_digit_year`). Whitespace
/// around each component is ignored.
///
/// Every kind of failure (wrong number of components, non-numeric text, out-of-range
/// values) is reported the same way, as `None`.
///
/// ### Example:
/// ```rust
/// use price_lookup::normalize_date;
///
/// let date = normalize_date("1/2/99").unwrap();
/// assert_eq!(date.to_string(), "01/02/1999");
///
/// assert!(normalize_date("13/01/2020").is_none());
/// assert!(normalize_date("2020-01-01").is_none());
/// ```
pub fn normalize_date(raw: &str) -> Option<CanonicalDate> {
    let mut components = raw.split(DATE_SEPARATOR);

    let (month, day, year) = match (
        components.next(),
        components.next(),
        components.next(),
        components.next(),
    ) {
        (Some(month), Some(day), Some(year), None) => (month.trim(), day.trim(), year.trim()),
        _ => return None,
    };

    let year = if year.len() == 2 {
        expand_two_digit_year(parse_two_digit_year(year)?)
    } else {
        year.parse().ok()?
    };

    // Unsigned parsing accepts a leading `+` and rejects `-`
    let month = month.parse().ok()?;
    let day = day.parse().ok()?;

    CanonicalDate::new(month, day, year)
}

/// A two-character year is only expanded when both characters are digits, so `+5` is
/// rejected rather than read as `05`.
fn parse_two_digit_year(year: &str) -> Option<u16> {
    if !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    year.parse().ok()
}
