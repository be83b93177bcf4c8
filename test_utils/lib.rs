pub mod constants;

use flate2::write::GzEncoder;
use flate2::Compression;
use price_lookup::{CanonicalDate, Price, PriceTable};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Reference lookup which scans every record, used to check the binary search.
pub fn linear_lookup(price_table: &PriceTable, date: &CanonicalDate) -> Option<Price> {
    price_table
        .iter()
        .find(|record| &record.date == date)
        .map(|record| record.price)
}

/// Gzip-compresses a byte slice in memory.
pub fn gzip_bytes(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .expect("Failed to write to gzip encoder");
    encoder.finish().expect("Failed to finalize compression")
}

/// Reads a fixture file into a string.
pub fn read_fixture<P: AsRef<Path>>(path: P) -> String {
    fs::read_to_string(path.as_ref())
        .unwrap_or_else(|e| panic!("Failed to read fixture {:?}: {}", path.as_ref(), e))
}

/// Renders `(month, day, year)` triples as `MM/DD/YYYY` raw date text.
pub fn format_raw_date(month: u8, day: u8, year: u16) -> String {
    format!("{:02}/{:02}/{}", month, day, year)
}
