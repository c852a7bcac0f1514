const BYTE_ORDER_MARK: char = '\u{feff}';

/// Lowercases `raw` and drops every whitespace character, including a
/// byte-order mark. `None` becomes "".
pub fn normalize<'a>(raw: impl Into<Option<&'a str>>) -> String {
    raw.into()
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != BYTE_ORDER_MARK)
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_whitespace_and_case() {
        assert_eq!(normalize("  RSA 225-A : 24 "), "rsa225-a:24");
        assert_eq!(normalize("540-A"), "540-a");
        assert_eq!(normalize("\t261\n"), "261");
    }

    #[test]
    fn test_normalize_strips_byte_order_mark() {
        assert_eq!(normalize("\u{feff}RSA 225-A:24"), "rsa225-a:24");
        assert_eq!(normalize("225\u{feff}-a"), "225-a");
    }

    #[test]
    fn test_normalize_missing_input() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("   ")), "");
        assert_eq!(normalize(""), "");
    }
}
