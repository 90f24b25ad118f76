use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::AddressError;

pub const DEFAULT_COUNTRY: &str = "Australia";

/// An address broken into its parts.
///
/// Every field is a plain string and is left empty when the parser could not
/// find the part. `country` is never read from the input and always holds
/// [`DEFAULT_COUNTRY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAddress {
    pub line1: String,
    pub line2: String,
    pub line3: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip: String,
}

impl Default for ParsedAddress {
    fn default() -> Self {
        ParsedAddress {
            line1: String::new(),
            line2: String::new(),
            line3: String::new(),
            city: String::new(),
            state: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            zip: String::new(),
        }
    }
}

impl ParsedAddress {
    pub fn field(&self, field: AddressField) -> &str {
        match field {
            AddressField::Line1 => &self.line1,
            AddressField::Line2 => &self.line2,
            AddressField::Line3 => &self.line3,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
            AddressField::Zip => &self.zip,
        }
    }
}

/// The parts of an address that can be pulled out one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Line1,
    Line2,
    Line3,
    City,
    State,
    Zip,
}

impl AddressField {
    pub const ALL: [AddressField; 6] = [
        AddressField::Line1,
        AddressField::Line2,
        AddressField::Line3,
        AddressField::City,
        AddressField::State,
        AddressField::Zip,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressField::Line1 => "line1",
            AddressField::Line2 => "line2",
            AddressField::Line3 => "line3",
            AddressField::City => "city",
            AddressField::State => "state",
            AddressField::Zip => "zip",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressField {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddressField::ALL
            .iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| AddressError::UnknownField(s.to_string()))
    }
}

/// Australian states and territories, by postal abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    WA,
    SA,
    NSW,
    VIC,
    QLD,
    NT,
    TAS,
    ACT,
}

impl State {
    pub const ALL: [State; 8] = [
        State::WA,
        State::SA,
        State::NSW,
        State::VIC,
        State::QLD,
        State::NT,
        State::TAS,
        State::ACT,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            State::WA => "WA",
            State::SA => "SA",
            State::NSW => "NSW",
            State::VIC => "VIC",
            State::QLD => "QLD",
            State::NT => "NT",
            State::TAS => "TAS",
            State::ACT => "ACT",
        }
    }
}

impl FromStr for State {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        State::ALL
            .iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| AddressError::UnknownState(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_country_is_australia() {
        let address = ParsedAddress::default();
        assert_eq!(address.country, "Australia");
        assert_eq!(address.line1, "");
        assert_eq!(address.zip, "");
    }

    #[test]
    fn field_lookup() {
        let address = ParsedAddress {
            line1: "12 Smith St".into(),
            city: "Sydney".into(),
            state: "NSW".into(),
            zip: "2000".into(),
            ..Default::default()
        };
        assert_eq!(address.field(AddressField::Line1), "12 Smith St");
        assert_eq!(address.field(AddressField::Line2), "");
        assert_eq!(address.field(AddressField::City), "Sydney");
        assert_eq!(address.field(AddressField::State), "NSW");
        assert_eq!(address.field(AddressField::Zip), "2000");
    }

    #[test]
    fn field_from_str() {
        assert_eq!("city".parse::<AddressField>().unwrap(), AddressField::City);
        assert_eq!("LINE3".parse::<AddressField>().unwrap(), AddressField::Line3);
        assert!("country".parse::<AddressField>().is_err());
    }

    #[test]
    fn state_from_str_ignores_case() {
        assert_eq!("nsw".parse::<State>().unwrap(), State::NSW);
        assert_eq!("Tas".parse::<State>().unwrap(), State::TAS);
        assert!("NZ".parse::<State>().is_err());
    }

    #[test]
    fn state_abbreviations() {
        let all: Vec<&str> = State::ALL.iter().map(|state| state.as_str()).collect();
        assert_eq!(all, vec!["WA", "SA", "NSW", "VIC", "QLD", "NT", "TAS", "ACT"]);
    }
}
