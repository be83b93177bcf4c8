use crate::models::{CanonicalDate, LookupOutcome, PriceRecord, RecordDiagnostic, SkipReason};
use crate::types::{DateText, Price, PriceText};
use crate::utils::{normalize_date, parse_price};
use log::{debug, warn};
use std::cmp::Ordering;

/// An immutable, date-sorted table of prices.
///
/// Built once from raw `(date text, price text)` pairs via `PriceTable::build`, then
/// queried with `lookup` (or `find` for an already normalized date). Nothing mutates
/// the table after construction, so it can be shared freely between readers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    records: Vec<PriceRecord>,
}

impl PriceTable {
    /// Validates, normalizes and sorts raw records into a table.
    ///
    /// Rows which cannot be used are skipped rather than aborting construction. One
    /// `RecordDiagnostic` is returned (and logged) for each skipped row, in input order.
    ///
    /// Records sharing a date are kept, in their original relative order.
    pub fn build<I, D, P>(raw_records: I) -> (Self, Vec<RecordDiagnostic>)
    where
        I: IntoIterator<Item = (D, P)>,
        D: AsRef<str>,
        P: AsRef<str>,
    {
        let mut records = Vec::new();
        let mut diagnostics = Vec::new();

        for (idx, (date_text, price_text)) in raw_records.into_iter().enumerate() {
            let date_text = date_text.as_ref();
            let price_text = price_text.as_ref();

            match Self::validate_record(date_text, price_text) {
                Ok(record) => records.push(record),
                Err(reason) => {
                    let diagnostic = RecordDiagnostic {
                        row_number: idx + 1,
                        date_text: DateText::from(date_text),
                        price_text: PriceText::from(price_text),
                        reason,
                    };

                    warn!("{}", diagnostic);
                    diagnostics.push(diagnostic);
                }
            }
        }

        // `sort_by` is stable, so duplicate dates keep their input order
        records.sort_by(|a, b| a.date.cmp(&b.date));

        debug!(
            "Built price table with {} records ({} skipped)",
            records.len(),
            diagnostics.len()
        );

        (Self { records }, diagnostics)
    }

    fn validate_record(date_text: &str, price_text: &str) -> Result<PriceRecord, SkipReason> {
        let date_text = date_text.trim();
        let price_text = price_text.trim();

        if date_text.is_empty() || price_text.is_empty() {
            return Err(SkipReason::MalformedRecord);
        }

        let date = normalize_date(date_text).ok_or(SkipReason::InvalidDate)?;
        let price = parse_price(price_text).ok_or(SkipReason::InvalidPrice)?;

        Ok(PriceRecord { date, price })
    }

    /// Looks up the price for a date string in any format accepted by `normalize_date`.
    ///
    /// ### Example:
    /// ```rust
    /// use price_lookup::{LookupOutcome, PriceTable};
    ///
    /// let (table, _) = PriceTable::build(vec![("01/02/2020", "100.5"), ("1/1/20", "99.0")]);
    ///
    /// assert_eq!(table.lookup("01/01/2020"), LookupOutcome::Found(99.0));
    /// assert_eq!(table.lookup("03/03/2020"), LookupOutcome::NotFound);
    /// assert_eq!(table.lookup("not-a-date"), LookupOutcome::InvalidQuery);
    /// ```
    pub fn lookup(&self, query: &str) -> LookupOutcome {
        let Some(date) = normalize_date(query) else {
            debug!("Rejected lookup query {:?}", query);
            return LookupOutcome::InvalidQuery;
        };

        match self.find(&date) {
            Some(price) => LookupOutcome::Found(price),
            None => LookupOutcome::NotFound,
        }
    }

    /// Same as `lookup`, but does not distinguish invalid queries from misses.
    pub fn lookup_price(&self, query: &str) -> Option<Price> {
        self.lookup(query).price()
    }

    /// Binary search for an exact date.
    ///
    /// If several records share the date, which one is returned is unspecified.
    pub fn find(&self, date: &CanonicalDate) -> Option<Price> {
        // Half-open bounds: the candidate range is `low..high`
        let mut low = 0;
        let mut high = self.records.len();

        while low < high {
            let mid = low + (high - low) / 2;
            let record = &self.records[mid];

            match record.date.cmp(date) {
                Ordering::Equal => return Some(record.price),
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
            }
        }

        None
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, sorted ascending by date.
    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PriceRecord> {
        self.records.iter()
    }

    pub fn first_date(&self) -> Option<CanonicalDate> {
        self.records.first().map(|record| record.date)
    }

    pub fn last_date(&self) -> Option<CanonicalDate> {
        self.records.last().map(|record| record.date)
    }

    /// Dates which appear more than once in the table, ascending and without repeats.
    pub fn duplicate_dates(&self) -> Vec<CanonicalDate> {
        let mut duplicates: Vec<CanonicalDate> = self
            .records
            .windows(2)
            .filter(|pair| pair[0].date == pair[1].date)
            .map(|pair| pair[0].date)
            .collect();

        duplicates.dedup();

        duplicates
    }
}

impl<'a> IntoIterator for &'a PriceTable {
    type Item = &'a PriceRecord;
    type IntoIter = std::slice::Iter<'a, PriceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(month: u8, day: u8, year: u16) -> CanonicalDate {
        CanonicalDate::new(month, day, year).unwrap()
    }

    #[test]
    fn test_build_skips_whitespace_only_fields() {
        let (table, diagnostics) = PriceTable::build(vec![("   ", "50"), ("01/01/2020", "\t")]);

        assert!(table.is_empty());
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics
            .iter()
            .all(|diagnostic| diagnostic.reason == SkipReason::MalformedRecord));
    }

    #[test]
    fn test_build_reports_row_numbers_in_input_order() {
        let (_, diagnostics) = PriceTable::build(vec![
            ("01/01/2020", "1.0"),
            ("13/01/2020", "1.0"),
            ("01/02/2020", "x"),
        ]);

        let rows: Vec<_> = diagnostics
            .iter()
            .map(|diagnostic| (diagnostic.row_number, diagnostic.reason))
            .collect();

        assert_eq!(
            rows,
            vec![(2, SkipReason::InvalidDate), (3, SkipReason::InvalidPrice)]
        );
    }

    #[test]
    fn test_build_keeps_duplicates_in_input_order() {
        let (table, _) = PriceTable::build(vec![
            ("01/02/2020", "3.0"),
            ("01/01/2020", "1.0"),
            ("1/1/2020", "2.0"),
        ]);

        let prices: Vec<_> = table.iter().map(|record| record.price).collect();
        assert_eq!(prices, vec![1.0, 2.0, 3.0]);
        assert_eq!(table.duplicate_dates(), vec![date(1, 1, 2020)]);
    }

    #[test]
    fn test_duplicate_lookup_returns_one_of_the_duplicates() {
        let (table, _) = PriceTable::build(vec![("01/01/2020", "1.0"), ("01/01/2020", "2.0")]);

        let price = table.find(&date(1, 1, 2020)).unwrap();
        assert!(price == 1.0 || price == 2.0);
    }

    #[test]
    fn test_find_on_empty_table() {
        let table = PriceTable::default();
        assert_eq!(table.find(&date(1, 1, 2020)), None);
        assert_eq!(table.lookup("01/01/2020"), LookupOutcome::NotFound);
    }

    #[test]
    fn test_find_before_first_and_after_last() {
        let (table, _) = PriceTable::build(vec![("06/01/2000", "1.0"), ("06/02/2000", "2.0")]);

        assert_eq!(table.find(&date(1, 1, 1900)), None);
        assert_eq!(table.find(&date(12, 31, 2050)), None);
        assert_eq!(table.find(&date(6, 2, 2000)), Some(2.0));
    }

    #[test]
    fn test_first_and_last_dates() {
        let (table, _) = PriceTable::build(vec![
            ("03/01/2021", "3.0"),
            ("01/01/99", "1.0"),
            ("02/01/2021", "2.0"),
        ]);

        assert_eq!(table.first_date(), Some(date(1, 1, 1999)));
        assert_eq!(table.last_date(), Some(date(3, 1, 2021)));
    }

    #[test]
    fn test_lookup_price_collapses_invalid_queries() {
        let (table, _) = PriceTable::build(vec![("01/01/2020", "99.0")]);

        assert_eq!(table.lookup_price("01/01/2020"), Some(99.0));
        assert_eq!(table.lookup_price("01/01"), None);
        assert_eq!(table.lookup_price("01/02/2020"), None);
    }
}
