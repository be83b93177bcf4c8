use price_lookup::{normalize_date, CanonicalDate};

#[cfg(test)]
mod normalize_date_tests {
    use super::*;

    fn date(month: u8, day: u8, year: u16) -> CanonicalDate {
        CanonicalDate::new(month, day, year).unwrap()
    }

    #[test]
    fn test_four_digit_year() {
        assert_eq!(normalize_date("01/02/2020"), Some(date(1, 2, 2020)));
    }

    #[test]
    fn test_single_digit_month_and_day() {
        assert_eq!(normalize_date("1/2/2020"), Some(date(1, 2, 2020)));
    }

    #[test]
    fn test_two_digit_year_pivot() {
        assert_eq!(normalize_date("01/01/50").map(|d| d.year()), Some(2050));
        assert_eq!(normalize_date("01/01/51").map(|d| d.year()), Some(1951));
        assert_eq!(normalize_date("01/01/00").map(|d| d.year()), Some(2000));
        assert_eq!(normalize_date("01/01/99").map(|d| d.year()), Some(1999));
    }

    #[test]
    fn test_month_out_of_range() {
        assert_eq!(normalize_date("13/01/2020"), None);
        assert_eq!(normalize_date("00/01/2020"), None);
    }

    #[test]
    fn test_day_out_of_range() {
        assert_eq!(normalize_date("01/32/2020"), None);
        assert_eq!(normalize_date("01/00/2020"), None);
    }

    #[test]
    fn test_year_out_of_range() {
        assert_eq!(normalize_date("01/01/1899"), None);
        assert_eq!(normalize_date("01/01/2051"), None);
        // Neither two nor four digits, so no expansion happens
        assert_eq!(normalize_date("01/01/5"), None);
        assert_eq!(normalize_date("01/01/205"), None);
    }

    #[test]
    fn test_calendar_invalid_dates_pass_through() {
        assert_eq!(normalize_date("02/30/1920"), Some(date(2, 30, 1920)));
        assert_eq!(normalize_date("04/31/2021"), Some(date(4, 31, 2021)));
        assert_eq!(normalize_date("02/29/2023"), Some(date(2, 29, 2023)));
    }

    #[test]
    fn test_wrong_component_count() {
        assert_eq!(normalize_date("01/02"), None);
        assert_eq!(normalize_date("01/02/2020/03"), None);
        assert_eq!(normalize_date("01-02-2020"), None);
        assert_eq!(normalize_date(""), None);
        assert_eq!(normalize_date("//"), None);
    }

    #[test]
    fn test_non_numeric_components() {
        assert_eq!(normalize_date("Jan/02/2020"), None);
        assert_eq!(normalize_date("01/02/20x0"), None);
        assert_eq!(normalize_date("not-a-date"), None);
        assert_eq!(normalize_date("01.5/02/2020"), None);
    }

    #[test]
    fn test_canonical_form() {
        let date = normalize_date("3/7/05").unwrap();
        assert_eq!(date.to_string(), "03/07/2005");
    }
}
