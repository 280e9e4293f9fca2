//! Parsing of operator list input
//!
//! Lists are comma separated; the full-width comma `，` is accepted too since
//! keywords are usually typed with a CJK input method.

use crate::error::{self, Result};

const SEPARATORS: [char; 2] = [',', '，'];

/// Split a list on `,` / `，`, trimming items and dropping empties.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(SEPARATORS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a list of 1-based indices.
///
/// Every token must be a positive integer. Duplicates are dropped and the
/// first-seen order is kept.
pub fn parse_indices(input: &str) -> Result<Vec<usize>> {
    let mut indices = Vec::new();
    for token in split_list(input) {
        let index = token
            .parse::<usize>()
            .ok()
            .filter(|i| *i > 0)
            .ok_or_else(|| error::input::invalid(format!("'{token}' is not a valid number")))?;
        if !indices.contains(&index) {
            indices.push(index);
        }
    }
    if indices.is_empty() {
        return Err(error::input::invalid("no numbers given"));
    }
    Ok(indices)
}

/// Join index arguments given as separate CLI values into one list string.
pub fn join_args(args: &[String]) -> String {
    args.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("a, b，c,,  "), vec!["a", "b", "c"]);
        assert!(split_list("").is_empty());
        assert_eq!(split_list("手机+华为，手机!苹果"), vec!["手机+华为", "手机!苹果"]);
    }

    #[test]
    fn test_parse_indices() {
        assert_eq!(parse_indices("3, 1，3").ok(), Some(vec![3, 1]));
        assert!(parse_indices("1,x").is_err());
        assert!(parse_indices("0").is_err());
        assert!(parse_indices("-1").is_err());
        assert!(parse_indices(" , ").is_err());
    }

    #[test]
    fn test_join_args() {
        let args = vec!["1".to_string(), "2,3".to_string()];
        assert_eq!(parse_indices(&join_args(&args)).ok(), Some(vec![1, 2, 3]));
    }
}
