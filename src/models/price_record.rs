use crate::models::CanonicalDate;
use crate::types::Price;

/// A validated price for a single date.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PriceRecord {
    pub date: CanonicalDate,
    pub price: Price,
}
