//! Row Filter
//!
//! Only the row side is lowercased; the filter value is compared as typed,
//! so an uppercase filter never matches anything.

/// Whether a row with `row_text` stays visible under `filter`
pub fn is_visible(row_text: &str, filter: &str) -> bool {
    row_text.to_lowercase().contains(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_match() {
        let rows = ["buy milk", "walk dog"];
        let visible: Vec<_> = rows.iter().filter(|r| is_visible(r, "mi")).collect();
        assert_eq!(visible, vec![&"buy milk"]);
    }

    #[test]
    fn test_empty_filter_shows_everything() {
        assert!(is_visible("buy milk", ""));
        assert!(is_visible("walk dog", ""));
    }

    #[test]
    fn test_row_text_is_lowercased() {
        assert!(is_visible("Buy MILK", "milk"));
    }

    #[test]
    fn test_filter_value_is_not_lowercased() {
        assert!(!is_visible("buy milk", "Milk"));
        assert!(!is_visible("Buy Milk", "Milk"));
    }
}
