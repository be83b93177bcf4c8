// Types listed here are either shared across multiple files and/or exposed via the library.

/// The date column of a price history row, exactly as read from the source.
pub type DateText = String;

/// The price column of a price history row, exactly as read from the source.
pub type PriceText = String;

/// A closing price. Always finite and non-negative once stored in a `PriceTable`.
pub type Price = f64;

/// An unvalidated `(date text, price text)` pair as received from the input source.
pub type RawRecord = (DateText, PriceText);

/// A list of raw records, in source order.
pub type RawRecordList = Vec<RawRecord>;

/// 1-based position of a raw record within its input sequence.
pub type RowNumber = usize;
