use crate::constants::{QUERY_PROMPT, STOP_COMMAND};
use crate::models::{LookupOutcome, PriceTable};
use log::debug;
use std::io::{self, BufRead, Write};

/// Interactive prompt loop which answers date queries against a `PriceTable`.
///
/// Reads one query per line until `stop` (any case) or end of input.
pub struct QuerySession<'a> {
    price_table: &'a PriceTable,
}

impl<'a> QuerySession<'a> {
    pub fn new(price_table: &'a PriceTable) -> Self {
        Self { price_table }
    }

    /// Runs the prompt loop, returning the number of queries answered.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<usize> {
        let mut query_count = 0;
        let mut line = String::new();

        loop {
            write!(output, "{}", QUERY_PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("Query input closed");
                break;
            }

            let query = line.trim();

            if query.eq_ignore_ascii_case(STOP_COMMAND) {
                writeln!(output, "Program stopped.")?;
                break;
            }

            writeln!(output, "{}\n", self.respond(query))?;
            query_count += 1;
        }

        Ok(query_count)
    }

    /// Renders the response line for a single query.
    pub fn respond(&self, query: &str) -> String {
        match self.price_table.lookup(query) {
            // Debug keeps every stored digit and always shows a decimal point
            LookupOutcome::Found(price) => format!("Stock price on {}: ${:?}", query, price),
            LookupOutcome::NotFound => format!("Date {} not found.", query),
            LookupOutcome::InvalidQuery => format!(
                "Invalid date format: {}. Please enter a valid date in MM/DD/YYYY format.",
                query
            ),
        }
    }
}
