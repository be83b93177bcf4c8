use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while acquiring price history input.
///
/// Building and querying a `PriceTable` never fails; bad rows and bad queries are
/// reported through `RecordDiagnostic` and `LookupOutcome` instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Source Not Found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Parser Error: {0}")]
    ParserError(String),

    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Other Error: {0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(msg: String) -> Error {
        Error::Other(msg)
    }
}
