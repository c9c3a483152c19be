pub mod precision;
pub mod range;
pub mod source;
pub mod token;

pub use precision::{DatePrecision, ResolvedDate};
pub use range::{extract_date_ranges, DateRange, RangeWindow};
pub use source::{create_date_source, load_source_from_env, DateRangeSource, RegexDateSource};
pub use token::parse_date_token;
