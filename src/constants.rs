use crate::models::PriceHistoryLoaderConfig;

/// Separator between the month, day and year components of a date.
pub const DATE_SEPARATOR: char = '/';

/// Two-digit years above this value are expanded into the 1900s; all others into the 2000s.
pub const TWO_DIGIT_YEAR_PIVOT: u16 = 50;

pub const MIN_YEAR: u16 = 1900;
pub const MAX_YEAR: u16 = 2050;

pub const MIN_MONTH: u8 = 1;
pub const MAX_MONTH: u8 = 12;

// Generic bound only; month lengths and leap years are not considered.
pub const MIN_DAY: u8 = 1;
pub const MAX_DAY: u8 = 31;

pub const DEFAULT_PRICE_HISTORY_LOADER_CONFIG: &PriceHistoryLoaderConfig =
    &PriceHistoryLoaderConfig {
        has_headers: true,
        delimiter: b',',
        date_column: 0,
        price_column: 1,
    };

/// Typing this (case-insensitive) at the query prompt ends the session.
pub const STOP_COMMAND: &str = "stop";

pub const QUERY_PROMPT: &str = "Enter a date (MM/DD/YYYY) or type 'stop' to end: ";

/// File extension which marks a gzip-compressed price history.
pub const GZIP_FILE_EXTENSION: &str = "gz";
