use crate::constants::GZIP_FILE_EXTENSION;
use crate::models::{PriceTable, RecordDiagnostic};
use crate::types::RawRecordList;
use crate::Error;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use log::info;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

/// Describes where the date and price columns live in a price history CSV.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PriceHistoryLoaderConfig {
    pub has_headers: bool,
    pub delimiter: u8,
    pub date_column: usize,
    pub price_column: usize,
}

impl PriceHistoryLoaderConfig {
    /// Converts a delimiter character into the single byte the CSV reader expects.
    pub fn delimiter_from_char(delimiter: char) -> Result<u8, Error> {
        u8::try_from(delimiter).map_err(|_| {
            Error::from(format!(
                "Delimiter must be a single-byte character: {:?}",
                delimiter
            ))
        })
    }
}

pub struct PriceHistoryLoader {}

impl PriceHistoryLoader {
    /// Reads raw `(date, price)` records from any CSV source.
    ///
    /// Rows are not validated here. A row which is too short to contain a column
    /// produces an empty string for it, so `PriceTable::build` reports it as malformed.
    /// Bytes which are not valid UTF-8 are replaced with `U+FFFD`, so such a row fails
    /// date or price validation instead of aborting the load.
    pub fn read_raw_records<R: Read>(
        reader: R,
        config: &PriceHistoryLoaderConfig,
    ) -> Result<RawRecordList, Error> {
        let mut raw_records = RawRecordList::new();

        let mut reader = ReaderBuilder::new()
            .has_headers(config.has_headers)
            .delimiter(config.delimiter)
            .flexible(true) // Short rows are reported by the table builder
            .from_reader(reader);

        for record in reader.byte_records() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            let date_text = record.get(config.date_column).unwrap_or_default();
            let price_text = record.get(config.price_column).unwrap_or_default();

            raw_records.push((
                String::from_utf8_lossy(date_text).into_owned(),
                String::from_utf8_lossy(price_text).into_owned(),
            ));
        }

        Ok(raw_records)
    }

    pub fn read_raw_records_from_string(
        csv: &str,
        config: &PriceHistoryLoaderConfig,
    ) -> Result<RawRecordList, Error> {
        Self::read_raw_records(Cursor::new(csv), config)
    }

    /// Decompress and parse a gzip-compressed price history
    pub fn extract_raw_records_from_gz_bytes(
        read_bytes: &[u8],
        config: &PriceHistoryLoaderConfig,
    ) -> Result<RawRecordList, Error> {
        Self::read_raw_records(GzDecoder::new(read_bytes), config)
    }

    /// Reads raw records from a file, decompressing it first if it ends in `.gz`.
    ///
    /// Fails with `Error::SourceNotFound` if the path does not exist.
    pub fn read_raw_records_from_path<P: AsRef<Path>>(
        path: P,
        config: &PriceHistoryLoaderConfig,
    ) -> Result<RawRecordList, Error> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Error::SourceNotFound(path.to_path_buf()));
        }

        let is_gzip = path
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case(GZIP_FILE_EXTENSION));

        let file = File::open(path)?;

        if is_gzip {
            Self::read_raw_records(GzDecoder::new(file), config)
        } else {
            Self::read_raw_records(file, config)
        }
    }

    /// Reads a price history file and builds a `PriceTable` from it.
    pub fn load_price_table<P: AsRef<Path>>(
        path: P,
        config: &PriceHistoryLoaderConfig,
    ) -> Result<(PriceTable, Vec<RecordDiagnostic>), Error> {
        let path = path.as_ref();
        let raw_records = Self::read_raw_records_from_path(path, config)?;
        let row_count = raw_records.len();

        let (price_table, diagnostics) = PriceTable::build(raw_records);

        info!(
            "Loaded {} of {} rows from {:?} ({} skipped)",
            price_table.len(),
            row_count,
            path,
            diagnostics.len()
        );

        Ok((price_table, diagnostics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_PRICE_HISTORY_LOADER_CONFIG;

    #[test]
    fn test_header_row_is_skipped() {
        let csv = "Date,Close\n01/02/2020,100.5\n";

        let raw_records =
            PriceHistoryLoader::read_raw_records_from_string(csv, DEFAULT_PRICE_HISTORY_LOADER_CONFIG)
                .unwrap();

        assert_eq!(
            raw_records,
            vec![("01/02/2020".to_string(), "100.5".to_string())]
        );
    }

    #[test]
    fn test_short_rows_become_empty_fields() {
        let csv = "Date,Close\n01/02/2020\n";

        let raw_records =
            PriceHistoryLoader::read_raw_records_from_string(csv, DEFAULT_PRICE_HISTORY_LOADER_CONFIG)
                .unwrap();

        assert_eq!(raw_records, vec![("01/02/2020".to_string(), String::new())]);
    }

    #[test]
    fn test_custom_columns_and_delimiter() {
        let config = PriceHistoryLoaderConfig {
            has_headers: false,
            delimiter: b';',
            date_column: 1,
            price_column: 3,
        };
        let csv = "NVDA;01/02/2020;open;100.5\n";

        let raw_records = PriceHistoryLoader::read_raw_records_from_string(csv, &config).unwrap();

        assert_eq!(
            raw_records,
            vec![("01/02/2020".to_string(), "100.5".to_string())]
        );
    }

    #[test]
    fn test_missing_source() {
        let result = PriceHistoryLoader::load_price_table(
            "does/not/exist.csv",
            DEFAULT_PRICE_HISTORY_LOADER_CONFIG,
        );

        assert!(matches!(result, Err(Error::SourceNotFound(_))));
    }

    #[test]
    fn test_invalid_utf8_row_does_not_abort_read() {
        let csv: &[u8] = b"Date,Close\n01/01/2020,99.0\n01/02/2020,1\xff0\n01/03/2020,5.0\n";

        let raw_records =
            PriceHistoryLoader::read_raw_records(csv, DEFAULT_PRICE_HISTORY_LOADER_CONFIG).unwrap();

        assert_eq!(raw_records.len(), 3);
        assert_eq!(raw_records[1], ("01/02/2020".to_string(), "1\u{FFFD}0".to_string()));
    }

    #[test]
    fn test_delimiter_from_char() {
        assert_eq!(PriceHistoryLoaderConfig::delimiter_from_char(';').unwrap(), b';');
        assert!(matches!(
            PriceHistoryLoaderConfig::delimiter_from_char('\u{2502}'),
            Err(Error::Other(_))
        ));
    }
}
