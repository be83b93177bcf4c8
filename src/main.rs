use clap::Parser;
use log::{error, info, warn};
use price_lookup::{
    write_diagnostics, Error, PriceHistoryLoader, PriceHistoryLoaderConfig, QuerySession,
    DEFAULT_PRICE_HISTORY_LOADER_CONFIG,
};
use std::io;
use std::path::PathBuf;

/// Look up historical stock prices by date.
#[derive(Debug, Parser)]
#[command(name = "price-lookup-cli", version, about)]
struct Cli {
    /// Price history CSV (optionally gzip-compressed, ending in `.gz`)
    path: PathBuf,

    /// Treat the first row as data instead of a header
    #[arg(long)]
    no_headers: bool,

    /// Field delimiter
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Zero-based index of the date column
    #[arg(long, default_value_t = DEFAULT_PRICE_HISTORY_LOADER_CONFIG.date_column)]
    date_column: usize,

    /// Zero-based index of the price column
    #[arg(long, default_value_t = DEFAULT_PRICE_HISTORY_LOADER_CONFIG.price_column)]
    price_column: usize,
}

impl Cli {
    fn loader_config(&self) -> Result<PriceHistoryLoaderConfig, Error> {
        let delimiter = PriceHistoryLoaderConfig::delimiter_from_char(self.delimiter)?;

        Ok(PriceHistoryLoaderConfig {
            has_headers: !self.no_headers,
            delimiter,
            date_column: self.date_column,
            price_column: self.price_column,
        })
    }
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let cli = Cli::parse();

    let config = match cli.loader_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(2);
        }
    };

    // The file must exist before anything is parsed
    if cli.path.exists() {
        println!("\nThe file '{}' exists.", cli.path.display());
    } else {
        println!("\nThe file '{}' does not exist.\n", cli.path.display());
        std::process::exit(1);
    }

    let (price_table, diagnostics) = match PriceHistoryLoader::load_price_table(&cli.path, &config)
    {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("Failed to load price history: {}", e);
            std::process::exit(1);
        }
    };

    // Every skipped row is shown regardless of the log filter
    if let Err(e) = write_diagnostics(&diagnostics, io::stdout()) {
        error!("Failed to report skipped rows: {}", e);
    }

    if let (Some(first_date), Some(last_date)) = (price_table.first_date(), price_table.last_date())
    {
        info!(
            "{} prices available from {} to {}",
            price_table.len(),
            first_date,
            last_date
        );
    }

    let duplicate_dates = price_table.duplicate_dates();
    if !duplicate_dates.is_empty() {
        warn!(
            "{} dates appear more than once; lookups for them may return any of the duplicates",
            duplicate_dates.len()
        );
    }

    let session = QuerySession::new(&price_table);
    let stdin = io::stdin();

    if let Err(e) = session.run(stdin.lock(), io::stdout()) {
        error!("Query session failed: {}", e);
        std::process::exit(1);
    }
}
