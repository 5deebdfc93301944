//! Color parsing errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color format: {input:?}, expected \"#RRGGBB\" (6 characters)")]
    InvalidFormat { input: String },

    #[error("invalid hex digit in color {input:?}")]
    InvalidHexDigit { input: String },
}

/// Result type alias for color operations.
pub type Result<T> = std::result::Result<T, ColorError>;
