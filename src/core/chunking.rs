//! Splitting oversized text on `.` and stitching translations back together

/// Fragment delimiter, also used as the join separator
pub const DELIMITER: char = '.';

/// Whether `text` is too long for one request. Length is in bytes, as the service counts it.
pub fn needs_split(text: &str, threshold: usize) -> bool {
    text.len() >= threshold
}

/// Non-empty `.`-delimited fragments in order
pub fn split_fragments(text: &str) -> Vec<&str> {
    text.split(DELIMITER).filter(|f| !f.is_empty()).collect()
}

/// Join with `.` and collapse each `..` into `.` in a single pass
pub fn reassemble<S: AsRef<str>>(translations: &[S]) -> String {
    let joined = translations
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(".");
    joined.replace("..", ".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_split_boundary() {
        assert!(!needs_split(&"a".repeat(399), 400));
        assert!(needs_split(&"a".repeat(400), 400));
        assert!(!needs_split("", 400));
    }

    #[test]
    fn test_needs_split_counts_bytes() {
        // 200 two-byte chars
        let text = "я".repeat(200);
        assert!(needs_split(&text, 400));
    }

    #[test]
    fn test_split_drops_trailing_empty_fragment() {
        assert_eq!(split_fragments("One. Two."), vec!["One", " Two"]);
    }

    #[test]
    fn test_split_drops_inner_empty_fragment() {
        assert_eq!(split_fragments("A..B"), vec!["A", "B"]);
    }

    #[test]
    fn test_split_without_delimiter() {
        assert_eq!(split_fragments("no stops here"), vec!["no stops here"]);
    }

    #[test]
    fn test_split_only_delimiters() {
        assert!(split_fragments("....").is_empty());
    }

    #[test]
    fn test_reassemble_collapses_doubled_stop() {
        assert_eq!(reassemble(&["Foo.", "Bar"]), "Foo.Bar");
    }

    #[test]
    fn test_reassemble_plain_join() {
        assert_eq!(reassemble(&["Eins", " Zwei", " Drei"]), "Eins. Zwei. Drei");
    }

    #[test]
    fn test_reassemble_single_pass() {
        // "a..." + "b" -> "a....b" -> "a..b"
        assert_eq!(reassemble(&["a...", "b"]), "a..b");
    }

    #[test]
    fn test_reassemble_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(reassemble(&empty), "");
    }
}
