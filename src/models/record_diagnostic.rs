use crate::types::{DateText, PriceText, RowNumber};
use std::fmt;

/// Why a raw record was left out of a `PriceTable`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The date or price text is empty or whitespace-only.
    MalformedRecord,
    /// The date text was rejected by `normalize_date`.
    InvalidDate,
    /// The price text is not a finite, non-negative number.
    InvalidPrice,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MalformedRecord => write!(f, "malformed row"),
            SkipReason::InvalidDate => write!(f, "invalid date"),
            SkipReason::InvalidPrice => write!(f, "invalid price"),
        }
    }
}

/// A raw record which was skipped while building a `PriceTable`, along with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDiagnostic {
    pub row_number: RowNumber,
    pub date_text: DateText,
    pub price_text: PriceText,
    pub reason: SkipReason,
}

impl fmt::Display for RecordDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Skipping row {} with {}: [{:?}, {:?}]",
            self.row_number, self.reason, self.date_text, self.price_text
        )
    }
}
