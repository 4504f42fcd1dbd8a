//! Log sanitization utilities
//!
//! Keeps large JSON bodies from flooding the debug log.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a string for logging.
///
/// Returns the original string if it fits, otherwise the longest prefix of at
/// most `TRUNCATE_LIMIT` bytes that ends on a char boundary, followed by the
/// total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }

    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);

    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        let s = r#"{"name":"Tatooine"}"#;
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn long_body_truncated() {
        let s = "b".repeat(TRUNCATE_LIMIT * 4);
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&"b".repeat(TRUNCATE_LIMIT)));
        assert!(result.ends_with(&format!("total {} bytes]", TRUNCATE_LIMIT * 4)));
    }

    #[test]
    fn multibyte_chars_safe() {
        // 'é' is 2 bytes, the limit falls inside one of them
        let s = format!("a{}", "é".repeat(200));
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }
}
