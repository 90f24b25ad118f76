pub mod address;
pub mod address_file_stream;
pub mod error;
pub mod parser;
pub mod scalar;

pub use address::{AddressField, ParsedAddress, State};
pub use error::{AddressError, Result};
pub use parser::{parse_address, MatchPolicy, Parser, ParserConfig};
pub use scalar::{parse_city, parse_line1, parse_line2, parse_line3, parse_state, parse_zip};
