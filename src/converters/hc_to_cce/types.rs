//! Type definitions for HC Encoder matrix conversion
//!
//! Defines the validated matrix types shared by the input parser and the
//! CCE document builder.

/// Number of values in an HC Encoder quantization matrix: two 64-entry
/// coding tables, intra-frame then inter-frame.
pub const MATRIX_VALUES: usize = 128;

/// A validated HC Encoder quantization matrix.
///
/// Holds exactly 128 uint8 values in input order. Position is significant:
/// it determines the element name and table-local index in the generated
/// CCE document. The fixed-size array makes the length invariant hold by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HcMatrix {
    values: [u8; MATRIX_VALUES],
}

impl HcMatrix {
    /// Build a matrix from already-validated values.
    pub fn from_values(values: [u8; MATRIX_VALUES]) -> Self {
        Self { values }
    }

    /// The matrix values in input order.
    pub fn values(&self) -> &[u8; MATRIX_VALUES] {
        &self.values
    }
}

/// A matrix paired with the display name used for output labeling.
#[derive(Debug, Clone)]
pub struct NamedMatrix {
    pub matrix: HcMatrix,

    /// Free-form display name; empty when none was supplied.
    pub name: String,
}

impl NamedMatrix {
    /// Create a named matrix with an empty display name.
    pub fn new(matrix: HcMatrix) -> Self {
        Self {
            matrix,
            name: String::new(),
        }
    }

    /// Set the display name (builder style).
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }
}
