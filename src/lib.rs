mod constants;
pub use constants::{DEFAULT_PRICE_HISTORY_LOADER_CONFIG, QUERY_PROMPT, STOP_COMMAND};
pub mod models;
pub use models::{
    CanonicalDate, Error, LookupOutcome, PriceHistoryLoader, PriceHistoryLoaderConfig,
    PriceRecord, PriceTable, QuerySession, RecordDiagnostic, SkipReason,
};
pub mod types;
mod utils;
pub use types::{DateText, Price, PriceText, RawRecord, RawRecordList, RowNumber};
pub use utils::{expand_two_digit_year, normalize_date, write_diagnostics};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Loads a price history CSV using the default column layout and builds a `PriceTable`.
///
/// Skipped rows are logged and returned alongside the table.
pub fn load_price_table<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<(PriceTable, Vec<RecordDiagnostic>), Error> {
    PriceHistoryLoader::load_price_table(path, DEFAULT_PRICE_HISTORY_LOADER_CONFIG)
}

/// Looks up the price for a date string, treating invalid dates as misses.
pub fn lookup_price(price_table: &PriceTable, query: &str) -> Option<Price> {
    price_table.lookup_price(query)
}
