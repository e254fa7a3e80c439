use signal::EncodeError;
use thiserror::Error;

/// Why an operation was refused. The display text is what the caller sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Invalid color: {0}. Must be Red, Green, or Blue.")]
    InvalidColor(String),
    #[error("Invalid number: {0}. Must be 0-100.")]
    InvalidNumber(String),
    #[error("No color selected")]
    NoColor,
    #[error("No number entered")]
    NoNumber,
    #[error("Transmission already in progress")]
    AlreadyTransmitting,
    #[error("No transmission to complete")]
    NothingToComplete,
    #[error("Cannot encode selection: {0}")]
    Encode(#[from] EncodeError),
}
