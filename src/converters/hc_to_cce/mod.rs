//! HC Encoder to CCE SP3 matrix converter module
//!
//! This module converts HC Encoder quantization matrix files (`.mtx`)
//! to the CCE SP3 XML matrix schema.
//!
//! # Overview
//!
//! The converter follows a two-stage pipeline:
//! 1. **Parse**: validate the raw text as 128 uint8 values
//! 2. **Generate**: render the fixed-shape CCE SP3 document text
//!
//! Validation is all-or-nothing: the first offending token aborts the
//! conversion and no partial document is produced. Generation is pure and
//! deterministic.
//!
//! # Basic Usage
//!
//! ```
//! use hc2cce::converters::hc_to_cce::convert_hc_matrix;
//!
//! let content = vec!["16"; 128].join(" ");
//! let document = convert_hc_matrix(&content, Some("bt709")).unwrap();
//! assert!(document.ends_with("</tSegment>"));
//! ```

pub mod errors;
pub mod types;
pub mod parser;
pub mod cce;

// Re-export main API
pub use errors::ParseError;
pub use types::{HcMatrix, NamedMatrix, MATRIX_VALUES};

/// Convert HC Encoder matrix file content to CCE SP3 document text.
///
/// # Arguments
///
/// * `content` - raw `.mtx` file content
/// * `name` - optional display name for the generated matrix
///
/// # Returns
///
/// * `Ok(String)` - the CCE SP3 document, CRLF line endings
/// * `Err(ParseError)` - fatal validation error naming the offender
pub fn convert_hc_matrix(content: &str, name: Option<&str>) -> Result<String, ParseError> {
    let matrix = parser::parse_matrix(content)?;

    let named = match name {
        Some(name) => NamedMatrix::new(matrix).with_name(name),
        None => NamedMatrix::new(matrix),
    };

    Ok(cce::generate_cce_document(&named))
}
