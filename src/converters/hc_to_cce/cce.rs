//! CCE SP3 matrix document generation
//!
//! Renders a validated HC Encoder matrix as CCE SP3 XML text. The document
//! is a fixed template: a constant header block carrying the display name,
//! one generated element line per matrix value, and a closing tag. Lines
//! are joined with CRLF endings; CCE consumers expect the layout
//! byte-for-byte, including the absence of a trailing newline.

use crate::converters::hc_to_cce::types::NamedMatrix;

/// Fixed document header; `{name}` carries the display name.
const SEGMENT_HEADER: &str = r#"<?xml version="1.0"?>
<tSegment xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema">
  <q_scale_type>Nonlinear</q_scale_type>
  <intra_dc_precision>Dc10</intra_dc_precision>
  <qm_fixed>false</qm_fixed>
  <Name>{name}</Name>"#;

/// Fixed document closing tag.
const SEGMENT_FOOTER: &str = "</tSegment>";

/// Values below this limit land in the Intra element family, the rest in
/// Inter.
const INTRA_VALUE_LIMIT: u8 = 64;

/// Entries per coding table half; element indices restart at this
/// boundary.
const TABLE_SIZE: usize = 64;

/// Generate the CCE SP3 document text for a named matrix.
///
/// Deterministic: the same matrix and name always produce the same text.
/// The element family is chosen by the value (below 64 is Intra, 64 and up
/// is Inter) while the numeric suffix is the position within its 64-entry
/// table half. The two are independent: a low value late in the sequence
/// still emits an Intra element with an Inter-half index.
pub fn generate_cce_document(named: &NamedMatrix) -> String {
    let header = SEGMENT_HEADER.replace("{name}", &named.name);

    let mut lines: Vec<String> = header.lines().map(str::to_string).collect();

    for (n, &value) in named.matrix.values().iter().enumerate() {
        let label = if value < INTRA_VALUE_LIMIT { "Intra" } else { "Inter" };
        let position = if n < TABLE_SIZE { n } else { n - TABLE_SIZE };
        lines.push(format!(
            "  <{}{}>{}</{}{}>",
            label, position, value, label, position
        ));
    }

    lines.push(SEGMENT_FOOTER.to_string());

    lines.join("\r\n")
}
