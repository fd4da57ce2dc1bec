// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Parser for the comma-separated id filter typed into the action panel.

use thiserror::Error;

/// Why an id filter could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdsError {
    /// At least one token was empty or contained something other than ASCII digits.
    #[error("ids must be numbers")]
    NotNumeric,
}

/// Parse user input like `"3, 4, 23"` into numeric ids.
///
/// Blank input (or input made only of trailing commas) yields an empty list, which the
/// backend treats as "everybody". Trailing commas are ignored so that a half-typed list
/// such as `"3, 4,"` stays valid while typing.
///
/// # Errors
///
/// Returns [`IdsError::NotNumeric`] when any trimmed token is empty, contains a
/// non-digit character, or does not fit into a `u64`.
pub fn parse_ids(input: &str) -> Result<Vec<u64>, IdsError> {
    let cleaned = input.trim().trim_end_matches(',');
    if cleaned.is_empty() {
        return Ok(Vec::new());
    }

    cleaned
        .split(',')
        .map(|token| {
            let token = token.trim();
            if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(IdsError::NotNumeric);
            }
            token.parse::<u64>().map_err(|_| IdsError::NotNumeric)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_means_no_filter() {
        assert_eq!(parse_ids(""), Ok(vec![]));
        assert_eq!(parse_ids("   "), Ok(vec![]));
        assert_eq!(parse_ids(" ,, "), Ok(vec![]));
    }

    #[test]
    fn parses_trimmed_tokens() {
        assert_eq!(parse_ids("3, 4,23"), Ok(vec![3, 4, 23]));
        assert_eq!(parse_ids("  007 "), Ok(vec![7]));
    }

    #[test]
    fn trailing_commas_are_ignored() {
        assert_eq!(parse_ids("1, 2,,,"), Ok(vec![1, 2]));
    }

    #[test]
    fn non_digit_token_rejects_whole_list() {
        assert_eq!(parse_ids("1, x, 3"), Err(IdsError::NotNumeric));
        assert_eq!(parse_ids("-1"), Err(IdsError::NotNumeric));
        assert_eq!(parse_ids("1.5"), Err(IdsError::NotNumeric));
        assert_eq!(parse_ids("1 2"), Err(IdsError::NotNumeric));
    }

    #[test]
    fn inner_empty_token_is_rejected() {
        assert_eq!(parse_ids("1,,2"), Err(IdsError::NotNumeric));
        assert_eq!(parse_ids(",1"), Err(IdsError::NotNumeric));
    }

    #[test]
    fn overflowing_id_is_rejected() {
        assert_eq!(
            parse_ids("99999999999999999999999"),
            Err(IdsError::NotNumeric)
        );
    }

    #[test]
    fn error_text_matches_inline_hint() {
        assert_eq!(IdsError::NotNumeric.to_string(), "ids must be numbers");
    }
}
