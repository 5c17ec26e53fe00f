//! HC Encoder to CCE SP3 matrix converter
//!
//! Library core of the `hc2cce` command line tool. Provides the
//! parse/validate/generate pipeline that converts HC Encoder quantization
//! matrix files (`.mtx`) into the CCE SP3 XML matrix schema, plus the CLI
//! layer the binary is built from.

pub mod cli;
pub mod converters;

// Re-export commonly used types
pub use converters::hc_to_cce::{convert_hc_matrix, HcMatrix, NamedMatrix, ParseError};
