use price_lookup::{LookupOutcome, PriceTable};

fn main() {
    env_logger::init();

    let raw_records = vec![
        ("01/03/2024", "47.569"),
        ("01/02/2024", "48.168"),
        ("01/04/2024", ""),
        ("1/5/24", "49.097"),
    ];

    let (price_table, diagnostics) = PriceTable::build(raw_records);

    for diagnostic in &diagnostics {
        println!("{}", diagnostic);
    }

    for query in ["01/02/2024", "01/05/2024", "01/06/2024", "yesterday"] {
        match price_table.lookup(query) {
            LookupOutcome::Found(price) => println!("{}: {:.2}", query, price),
            LookupOutcome::NotFound => println!("{}: no price recorded", query),
            LookupOutcome::InvalidQuery => println!("{}: not a date", query),
        }
    }
}
