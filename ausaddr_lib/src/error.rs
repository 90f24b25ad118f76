use thiserror::Error;

pub type Result<T> = std::result::Result<T, AddressError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("no 4-digit postcode in address: {0:?}")]
    MissingPostcode(String),

    #[error("no state or territory in address: {0:?}")]
    MissingState(String),

    #[error("unknown address field: {0}")]
    UnknownField(String),

    #[error("unknown state or territory: {0}")]
    UnknownState(String),
}
