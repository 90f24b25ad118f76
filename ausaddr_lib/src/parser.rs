use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    address::{ParsedAddress, State},
    error::{AddressError, Result},
};

static POSTCODE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{4}\b").unwrap());

// Case folding stays ASCII-only so that whatever matches here can be found
// again by `rfind_ignore_ascii_case` when the token is stripped.
static STATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternatives: Vec<&str> = State::ALL.iter().map(|state| state.as_str()).collect();
    Regex::new(&format!(r"(?i)\b(?-u:{})\b", alternatives.join("|"))).unwrap()
});

/// What to do when an address holds no postcode or no state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Leave the field empty and keep going.
    #[default]
    Lenient,
    /// Fail the parse.
    Strict,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub policy: MatchPolicy,
}

/// Splits Australian postal addresses into lines, city, state and postcode.
///
/// State and postcode are expected to trail the address. Whatever is left
/// once they are stripped is split on `,` and `.`: the last piece is the
/// city and the pieces before it are the street lines.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Parser {
        Parser { config }
    }

    /// Parse an address, leaving the postcode or state empty when none is found.
    ///
    /// This never fails, whatever the configured policy.
    pub fn parse(&self, address: &str) -> ParsedAddress {
        let zip = last_postcode(address).unwrap_or_default();
        assemble(address, zip, last_state(address))
    }

    /// Parse an address under the configured [`MatchPolicy`].
    pub fn try_parse(&self, address: &str) -> Result<ParsedAddress> {
        let zip = last_postcode(address);
        let state = last_state(address);
        if self.config.policy == MatchPolicy::Strict {
            if zip.is_none() {
                return Err(AddressError::MissingPostcode(address.to_string()));
            }
            if state.is_none() {
                return Err(AddressError::MissingState(address.to_string()));
            }
        }
        Ok(assemble(address, zip.unwrap_or_default(), state))
    }
}

/// Parse with the default (lenient) parser.
pub fn parse_address(address: &str) -> ParsedAddress {
    Parser::default().parse(address)
}

fn last_postcode(address: &str) -> Option<&str> {
    POSTCODE_PATTERN
        .find_iter(address)
        .last()
        .map(|found| found.as_str())
}

fn last_state(address: &str) -> Option<State> {
    STATE_PATTERN
        .find_iter(address)
        .last()
        .and_then(|found| found.as_str().parse().ok())
}

fn assemble(address: &str, zip: &str, state: Option<State>) -> ParsedAddress {
    let state = state.map(|state| state.as_str()).unwrap_or_default();
    let mut remainder = address.to_string();
    if !zip.is_empty() {
        if let Some(start) = remainder.rfind(zip) {
            remainder.replace_range(start..start + zip.len(), "");
            remainder = remainder.trim().to_string();
        }
    }
    if !state.is_empty() {
        if let Some(start) = rfind_ignore_ascii_case(&remainder, state) {
            remainder.replace_range(start..start + state.len(), "");
            remainder = remainder.trim().to_string();
        }
    }
    trace!(zip, state, remainder = %remainder, "stripped postcode and state");

    let mut segments: Vec<&str> = remainder
        .split([',', '.'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();
    let city = segments.pop().unwrap_or_default();

    ParsedAddress {
        line1: segments.first().copied().unwrap_or_default().to_string(),
        line2: segments.get(1).copied().unwrap_or_default().to_string(),
        line3: segments
            .get(2..)
            .map(|rest| rest.join(", "))
            .unwrap_or_default(),
        city: city.to_string(),
        state: state.to_string(),
        zip: zip.to_string(),
        ..Default::default()
    }
}

// The needle must be ASCII so that any match starts and ends on a char boundary.
fn rfind_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let (haystack, needle) = (haystack.as_bytes(), needle.as_bytes());
    if needle.is_empty() || !needle.is_ascii() || needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len())
        .rev()
        .find(|&start| haystack[start..start + needle.len()].eq_ignore_ascii_case(needle))
}
