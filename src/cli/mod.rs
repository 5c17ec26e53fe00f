//! Command line interface layer
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the converter binary. It
//! wires user-provided options to the conversion pipeline in
//! `converters::hc_to_cce`.
//!
//! If you are embedding the converter into another application, prefer
//! the library API (`converters::hc_to_cce::convert_hc_matrix`) instead
//! of calling the CLI code.

pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use errors::CliError;
pub use runner::run;
