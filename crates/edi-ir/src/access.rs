//! Bounds-safe field access shared by all format adapters
//!
//! Fetching a position past the end of a split segment yields `None`
//! instead of failing.

/// Value at `index`, or `None` when out of range
pub fn field_at<S: AsRef<str>>(items: &[S], index: usize) -> Option<String> {
    items.get(index).map(|s| s.as_ref().to_string())
}

/// Trimmed value at `index`; out of range or blank after trimming is `None`
pub fn trimmed_field_at<S: AsRef<str>>(items: &[S], index: usize) -> Option<String> {
    items
        .get(index)
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Split `value` on `separator` and fetch part `index`
///
/// `None` input stays `None`; composites shorter than `index + 1` yield `None`.
pub fn component_at(value: Option<&str>, separator: &str, index: usize) -> Option<String> {
    value.and_then(|v| v.split(separator).nth(index).map(str::to_string))
}

/// Leaf text taken verbatim; absent or empty text is `None`
pub fn leaf_text(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_at_in_range() {
        let items = ["UNH", "1", "COPARN:D:95B:UN"];
        assert_eq!(field_at(&items, 1), Some("1".to_string()));
        assert_eq!(field_at(&items, 0), Some("UNH".to_string()));
    }

    #[test]
    fn test_field_at_out_of_range_is_none() {
        let items = ["BGM"];
        assert_eq!(field_at(&items, 1), None);
        assert_eq!(field_at(&items, 99), None);

        let empty: [&str; 0] = [];
        assert_eq!(field_at(&empty, 0), None);
    }

    #[test]
    fn test_field_at_keeps_empty_values() {
        let items = ["NAD", "CZ", ""];
        assert_eq!(field_at(&items, 2), Some(String::new()));
    }

    #[test]
    fn test_trimmed_field_at() {
        let items = vec![
            "COPE02008".to_string(),
            "  CZ ".to_string(),
            "   ".to_string(),
            String::new(),
        ];
        assert_eq!(trimmed_field_at(&items, 1), Some("CZ".to_string()));
        assert_eq!(trimmed_field_at(&items, 2), None);
        assert_eq!(trimmed_field_at(&items, 3), None);
        assert_eq!(trimmed_field_at(&items, 4), None);
    }

    #[test]
    fn test_component_at() {
        assert_eq!(
            component_at(Some("COPARN:D:95B:UN"), ":", 1),
            Some("D".to_string())
        );
        assert_eq!(component_at(Some("COPARN"), ":", 1), None);
        assert_eq!(component_at(None, ":", 0), None);
        assert_eq!(
            component_at(Some("MSC:::MEDITERRANEAN"), ":::", 1),
            Some("MEDITERRANEAN".to_string())
        );
    }

    #[test]
    fn test_leaf_text() {
        assert_eq!(leaf_text(Some("MSC")), Some("MSC".to_string()));
        assert_eq!(leaf_text(Some(" MSC ")), Some(" MSC ".to_string()));
        assert_eq!(leaf_text(Some("")), None);
        assert_eq!(leaf_text(None), None);
    }
}
