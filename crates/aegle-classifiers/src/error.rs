use std::error::Error;
use std::fmt;

/// Custom error type for categorical encode/decode failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A value was not part of the encoder's fitted vocabulary.
    UnseenCategory { column: String, value: String },
    /// A code was outside the fitted class range.
    UnknownCode { column: String, code: u32 },
    /// No encoder was fitted for the requested column.
    MissingEncoder { column: String },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncodeError::UnseenCategory { column, value } => {
                write!(f, "Unseen category '{}' for column '{}'", value, column)
            }
            EncodeError::UnknownCode { column, code } => {
                write!(f, "Code {} is out of range for column '{}'", code, column)
            }
            EncodeError::MissingEncoder { column } => {
                write!(f, "No encoder fitted for column '{}'", column)
            }
        }
    }
}

impl Error for EncodeError {}
