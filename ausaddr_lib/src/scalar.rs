//! Null-in, null-out accessors for row-at-a-time callers.
//!
//! Each accessor takes a nullable address and returns one nullable field.
//! A failed parse, whether an error or a panic, comes back as `None` so that
//! one bad row never aborts a batch.

use std::panic::{self, AssertUnwindSafe};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::{address::AddressField, parser::Parser};

static DEFAULT_PARSER: Lazy<Parser> = Lazy::new(Parser::default);

impl Parser {
    /// Trim `address`, parse it and return the trimmed `field`.
    pub fn extract(&self, address: Option<&str>, field: AddressField) -> Option<String> {
        let address = address?;
        match panic::catch_unwind(AssertUnwindSafe(|| self.try_parse(address.trim()))) {
            Ok(Ok(parsed)) => Some(parsed.field(field).trim().to_string()),
            Ok(Err(err)) => {
                debug!(%field, %err, "address did not parse");
                None
            }
            Err(_) => {
                debug!(%field, "address parser panicked");
                None
            }
        }
    }

    pub fn extract_line1(&self, address: Option<&str>) -> Option<String> {
        self.extract(address, AddressField::Line1)
    }

    pub fn extract_line2(&self, address: Option<&str>) -> Option<String> {
        self.extract(address, AddressField::Line2)
    }

    pub fn extract_line3(&self, address: Option<&str>) -> Option<String> {
        self.extract(address, AddressField::Line3)
    }

    pub fn extract_city(&self, address: Option<&str>) -> Option<String> {
        self.extract(address, AddressField::City)
    }

    pub fn extract_state(&self, address: Option<&str>) -> Option<String> {
        self.extract(address, AddressField::State)
    }

    pub fn extract_zip(&self, address: Option<&str>) -> Option<String> {
        self.extract(address, AddressField::Zip)
    }
}

pub fn parse_line1(address: Option<&str>) -> Option<String> {
    DEFAULT_PARSER.extract_line1(address)
}

pub fn parse_line2(address: Option<&str>) -> Option<String> {
    DEFAULT_PARSER.extract_line2(address)
}

pub fn parse_line3(address: Option<&str>) -> Option<String> {
    DEFAULT_PARSER.extract_line3(address)
}

pub fn parse_city(address: Option<&str>) -> Option<String> {
    DEFAULT_PARSER.extract_city(address)
}

pub fn parse_state(address: Option<&str>) -> Option<String> {
    DEFAULT_PARSER.extract_state(address)
}

pub fn parse_zip(address: Option<&str>) -> Option<String> {
    DEFAULT_PARSER.extract_zip(address)
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;
    use crate::parser::{MatchPolicy, ParserConfig};

    const SYDNEY: &str = "12 Smith St, Sydney NSW 2000";

    fn strict() -> Parser {
        Parser::new(ParserConfig {
            policy: MatchPolicy::Strict,
        })
    }

    #[test]
    fn null_in_null_out() {
        assert_eq!(parse_line1(None), None);
        assert_eq!(parse_line2(None), None);
        assert_eq!(parse_line3(None), None);
        assert_eq!(parse_city(None), None);
        assert_eq!(parse_state(None), None);
        assert_eq!(parse_zip(None), None);
    }

    #[test]
    fn each_accessor_returns_its_field() {
        assert_eq!(parse_line1(Some(SYDNEY)).as_deref(), Some("12 Smith St"));
        assert_eq!(parse_line2(Some(SYDNEY)).as_deref(), Some(""));
        assert_eq!(parse_line3(Some(SYDNEY)).as_deref(), Some(""));
        assert_eq!(parse_city(Some(SYDNEY)).as_deref(), Some("Sydney"));
        assert_eq!(parse_state(Some(SYDNEY)).as_deref(), Some("NSW"));
        assert_eq!(parse_zip(Some(SYDNEY)).as_deref(), Some("2000"));
    }

    #[test]
    fn input_is_trimmed() {
        let padded = "   Unit 4, 56 High St, Parramatta, NSW, 2150 \t";
        assert_eq!(parse_line1(Some(padded)).as_deref(), Some("Unit 4"));
        assert_eq!(parse_line2(Some(padded)).as_deref(), Some("56 High St"));
        assert_eq!(parse_city(Some(padded)).as_deref(), Some("Parramatta"));
        assert_eq!(parse_zip(Some(padded)).as_deref(), Some("2150"));
    }

    #[test]
    fn lenient_missing_tokens_are_empty_not_null() {
        assert_eq!(parse_zip(Some("12 Smith St, Sydney NSW")).as_deref(), Some(""));
        assert_eq!(parse_state(Some("12 Smith St, Sydney 2000")).as_deref(), Some(""));
        assert_eq!(parse_city(Some("")).as_deref(), Some(""));
    }

    #[test]
    fn strict_failures_become_null() {
        let parser = strict();
        assert_eq!(parser.extract_zip(Some("12 Smith St, Sydney NSW")), None);
        assert_eq!(parser.extract_city(Some("12 Smith St, Sydney 2000")), None);
        assert_eq!(parser.extract_line1(Some("")), None);
        assert_eq!(
            parser.extract_line1(Some(SYDNEY)).as_deref(),
            Some("12 Smith St")
        );
    }

    #[test]
    fn extract_matches_named_accessors() {
        let parser = Parser::default();
        assert_eq!(
            parser.extract(Some(SYDNEY), AddressField::State),
            parser.extract_state(Some(SYDNEY))
        );
        assert_eq!(
            parser.extract(Some(SYDNEY), AddressField::Zip),
            parse_zip(Some(SYDNEY))
        );
    }

    proptest! {
        #[test]
        fn accessors_never_fail(input in "\\PC{0,80}") {
            for field in AddressField::ALL {
                prop_assert!(DEFAULT_PARSER.extract(Some(&input), field).is_some());
            }
        }
    }
}
