//! Format converters
//!
//! This module contains converters between quantization matrix formats.

pub mod hc_to_cce;

// Re-export for convenience
pub use hc_to_cce::{
    convert_hc_matrix,
    HcMatrix,
    NamedMatrix,
    ParseError,
};
