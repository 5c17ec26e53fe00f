//! Input parsing and validation for HC Encoder matrices
//!
//! Turns raw `.mtx` file content into a validated [`HcMatrix`]. The
//! normalization steps are narrow and order-dependent on purpose, so the
//! converter accepts and rejects exactly the same inputs as the HC Encoder
//! tooling: line breaks are removed outright (not replaced by spaces), and
//! only literal double-space runs collapse.

use crate::converters::hc_to_cce::errors::ParseError;
use crate::converters::hc_to_cce::types::{HcMatrix, MATRIX_VALUES};

/// Parse raw matrix file content into a validated [`HcMatrix`].
///
/// Fails on empty content, on a token count other than 128, and on the
/// first token that is not a base-10 integer in [0, 255].
pub fn parse_matrix(content: &str) -> Result<HcMatrix, ParseError> {
    if content.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let normalized = normalize(content);
    let tokens: Vec<&str> = normalized.split(' ').collect();

    if tokens.len() != MATRIX_VALUES {
        return Err(ParseError::TokenCount(tokens.len()));
    }

    let mut values = [0u8; MATRIX_VALUES];
    for (slot, token) in values.iter_mut().zip(tokens.iter()) {
        *slot = parse_value(token)?;
    }

    Ok(HcMatrix::from_values(values))
}

/// Flatten matrix content into a single space-separated line.
///
/// Removes every CR and LF character, trims the remainder, then collapses
/// exactly-double spaces in one left-to-right pass. Runs of three or more
/// spaces, or tabs, are left partially intact; the resulting empty tokens
/// are counted and rejected by the caller.
fn normalize(content: &str) -> String {
    let flattened: String = content
        .chars()
        .filter(|&c| !matches!(c, '\r' | '\n'))
        .collect();

    flattened.trim().replace("  ", " ")
}

/// Validate a single token as a uint8 matrix value.
fn parse_value(token: &str) -> Result<u8, ParseError> {
    let value: i64 = token
        .parse()
        .map_err(|_| ParseError::InvalidToken(token.to_string()))?;

    u8::try_from(value).map_err(|_| ParseError::OutOfRange(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 128 in-range tokens joined with single spaces.
    fn valid_content() -> String {
        vec!["16"; MATRIX_VALUES].join(" ")
    }

    #[test]
    fn test_parse_valid_matrix() {
        let matrix = parse_matrix(&valid_content()).expect("valid content should parse");
        assert_eq!(matrix.values().len(), MATRIX_VALUES);
        assert!(matrix.values().iter().all(|&v| v == 16));
    }

    #[test]
    fn test_values_keep_input_order() {
        let content: String = (0..MATRIX_VALUES)
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let matrix = parse_matrix(&content).expect("valid content should parse");
        assert_eq!(matrix.values()[0], 0);
        assert_eq!(matrix.values()[1], 1);
        assert_eq!(matrix.values()[127], 127);
    }

    #[test]
    fn test_empty_content_rejected() {
        assert_eq!(parse_matrix(""), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_too_few_tokens_rejected() {
        let content = vec!["16"; 127].join(" ");
        assert_eq!(parse_matrix(&content), Err(ParseError::TokenCount(127)));
    }

    #[test]
    fn test_too_many_tokens_rejected() {
        let content = vec!["16"; 129].join(" ");
        assert_eq!(parse_matrix(&content), Err(ParseError::TokenCount(129)));
    }

    #[test]
    fn test_non_numeric_token_rejected() {
        let mut tokens = vec!["16"; MATRIX_VALUES];
        tokens[5] = "abc";
        let err = parse_matrix(&tokens.join(" ")).unwrap_err();
        assert_eq!(err, ParseError::InvalidToken("abc".to_string()));
    }

    #[test]
    fn test_value_above_range_rejected() {
        let mut tokens = vec!["16"; MATRIX_VALUES];
        tokens[0] = "256";
        let err = parse_matrix(&tokens.join(" ")).unwrap_err();
        assert_eq!(err, ParseError::OutOfRange("256".to_string()));
    }

    #[test]
    fn test_negative_value_rejected_as_out_of_range() {
        // "-1" parses as an integer, so it fails range validation rather
        // than the numeric parse.
        let mut tokens = vec!["16"; MATRIX_VALUES];
        tokens[64] = "-1";
        let err = parse_matrix(&tokens.join(" ")).unwrap_err();
        assert_eq!(err, ParseError::OutOfRange("-1".to_string()));
    }

    #[test]
    fn test_first_offending_token_reported() {
        let mut tokens = vec!["16"; MATRIX_VALUES];
        tokens[10] = "abc";
        tokens[20] = "999";
        let err = parse_matrix(&tokens.join(" ")).unwrap_err();
        assert_eq!(err, ParseError::InvalidToken("abc".to_string()));
    }

    #[test]
    fn test_boundary_values_accepted() {
        let mut tokens = vec!["16"; MATRIX_VALUES];
        tokens[0] = "0";
        tokens[1] = "255";
        let matrix = parse_matrix(&tokens.join(" ")).expect("boundary values are valid");
        assert_eq!(matrix.values()[0], 0);
        assert_eq!(matrix.values()[1], 255);
    }

    #[test]
    fn test_double_spaces_collapse() {
        let content = vec!["16"; MATRIX_VALUES].join("  ");
        assert!(parse_matrix(&content).is_ok());
    }

    #[test]
    fn test_triple_spaces_leave_an_empty_token() {
        // The collapse is a single pass over literal double spaces, so a
        // triple-space gap leaves "  " behind and splits into an extra
        // empty token.
        let mut content = vec!["16"; MATRIX_VALUES].join(" ");
        content = content.replacen(" ", "   ", 1);
        assert_eq!(parse_matrix(&content), Err(ParseError::TokenCount(129)));
    }

    #[test]
    fn test_line_breaks_are_removed_not_spaced() {
        // Values separated only by a newline merge into one token.
        let mut tokens = vec!["16".to_string(); MATRIX_VALUES];
        tokens[0] = "1\n2".to_string();
        let content = tokens.join(" ");
        let matrix = parse_matrix(&content).expect("merged token is still a valid value");
        assert_eq!(matrix.values()[0], 12);
    }

    #[test]
    fn test_newline_separated_rows_parse() {
        // The usual .mtx layout: rows separated by " \n" so the newline
        // removal leaves single spaces between values.
        let row = vec!["16"; 8].join(" ");
        let content = vec![row; 16].join(" \n");
        assert!(parse_matrix(&content).is_ok());
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let content = format!("  {} \n", valid_content());
        assert!(parse_matrix(&content).is_ok());
    }
}
