//! CLI-level error types
//!
//! Wraps the converter's parse errors with the argument and filesystem
//! failures only the binary can encounter. Every variant is fatal: main
//! logs the message and exits nonzero, and no partial output is written.

use std::io;

use thiserror::Error;

use crate::converters::hc_to_cce::ParseError;

/// Fatal CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// No input path was supplied
    #[error("input-file can't be empty")]
    EmptyInputPath,

    /// Input path does not reference an `.mtx` file
    #[error("only .mtx files are supported")]
    UnsupportedExtension,

    /// Input path missing, not a regular file, or unreadable
    #[error("input-file \"{path}\" invalid or not readable")]
    UnreadableInput { path: String },

    /// Matrix content failed validation
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Output file could not be written
    #[error("unable to write file at \"{path}\"")]
    WriteFailure { path: String, source: io::Error },
}
