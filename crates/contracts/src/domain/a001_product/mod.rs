pub mod aggregate;
pub mod parser;

pub use aggregate::{fallback_catalog, ProductId, ProductRecord};
pub use parser::{lenient_number, parse_records};
