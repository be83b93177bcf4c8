pub mod canonical_date;
pub use canonical_date::CanonicalDate;

pub mod error;
pub use error::Error;

pub mod lookup_outcome;
pub use lookup_outcome::LookupOutcome;

pub mod price_history_loader;
pub use price_history_loader::{PriceHistoryLoader, PriceHistoryLoaderConfig};

pub mod price_record;
pub use price_record::PriceRecord;

pub mod price_table;
pub use price_table::PriceTable;

pub mod query_session;
pub use query_session::QuerySession;

pub mod record_diagnostic;
pub use record_diagnostic::{RecordDiagnostic, SkipReason};
