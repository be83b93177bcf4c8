use crate::types::Price;

/// Parses the price column of a raw record.
///
/// Surrounding whitespace is ignored. Returns `None` for text which is not a number,
/// and for negative or non-finite values (`NaN`, `inf`), which are not valid prices.
pub fn parse_price(price_text: &str) -> Option<Price> {
    let price: Price = price_text.trim().parse().ok()?;

    if !price.is_finite() || price < 0.0 {
        return None;
    }

    Some(price)
}
