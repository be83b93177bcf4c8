use crate::types::Price;

/// The result of querying a `PriceTable` with a date string.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(Price),
    /// The query text is not a valid date.
    InvalidQuery,
    /// The query is a valid date with no record in the table.
    NotFound,
}

impl LookupOutcome {
    /// Collapses the outcome into a price, treating invalid queries as misses.
    pub fn price(self) -> Option<Price> {
        match self {
            LookupOutcome::Found(price) => Some(price),
            LookupOutcome::InvalidQuery | LookupOutcome::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }
}
