use std::str::FromStr;

/// Reads and parses an environment variable, falling back to `default` when it
/// is unset or cannot be parsed.
pub(crate) fn parsed_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Reads a comma-separated list, dropping blank entries.
///
/// An unset variable, or one that yields no entries, falls back to `default`.
pub(crate) fn list_or(key: &str, default: &[&str]) -> Vec<String> {
    std::env::var(key)
        .ok()
        .map(|v| split_list(&v))
        .filter(|items| !items.is_empty())
        .unwrap_or_else(|| default.iter().map(|s| s.to_string()).collect())
}

pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_trims_and_drops_blanks() {
        assert_eq!(
            split_list(" a, b ,,c , "),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_split_list_empty() {
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_unset_variable_uses_default() {
        let value: u16 = parsed_or("CLUBROLL_TEST_SURELY_UNSET_VAR", 42);
        assert_eq!(value, 42);

        let list = list_or("CLUBROLL_TEST_SURELY_UNSET_LIST", &["x", "y"]);
        assert_eq!(list, vec!["x".to_string(), "y".to_string()]);
    }
}
