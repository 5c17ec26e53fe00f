//! Error types for HC Encoder matrix parsing
//!
//! Defines the validation failures for matrix input. All of them are fatal
//! for the run: validation is all-or-nothing over the whole value sequence
//! and reports the first offending token.

use thiserror::Error;

/// Fatal matrix parsing errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Input content has zero length
    #[error("input content can't be empty")]
    EmptyInput,

    /// Token count is not exactly 128
    #[error("valid matrices have to have 128 values, the input has {0} values")]
    TokenCount(usize),

    /// A token is not a base-10 integer
    #[error("got invalid matrix value \"{0}\"")]
    InvalidToken(String),

    /// A token's integer value does not fit in a uint8
    #[error("matrix value not in range: {0}. Should be of type uint8 (0 to 255)")]
    OutOfRange(String),
}
