pub mod expand_two_digit_year;
pub mod normalize_date;
pub mod parse_price;
pub mod write_diagnostics;

pub use expand_two_digit_year::expand_two_digit_year;
pub use normalize_date::normalize_date;
pub use parse_price::parse_price;
pub use write_diagnostics::write_diagnostics;
