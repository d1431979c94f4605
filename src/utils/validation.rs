//! Input-size limits and small lexical helpers shared by the parser and the CLI.

/// Longest single reference the parser accepts
pub const MAX_REFERENCE_LENGTH: usize = 1_024;

/// Longest text the free-text scanner reads; anything after this is ignored
pub const MAX_SCAN_INPUT_LENGTH: usize = 1_000_000;

/// Check that a reference is within the accepted length.
/// Returns an error message if it is too long, None if it is safe to parse.
///
/// # Examples
///
/// ```
/// use pericope::utils::validation::check_reference_length;
///
/// assert!(check_reference_length("GEN 1:1").is_none());
/// assert!(check_reference_length(&"1".repeat(5_000)).is_some());
/// ```
#[must_use]
pub fn check_reference_length(reference: &str) -> Option<String> {
    if reference.len() > MAX_REFERENCE_LENGTH {
        Some(format!(
            "reference is {} bytes, exceeding the maximum of {MAX_REFERENCE_LENGTH}",
            reference.len()
        ))
    } else {
        None
    }
}

/// Cut `text` down to at most [`MAX_SCAN_INPUT_LENGTH`] bytes on a char boundary
#[must_use]
pub fn truncate_scan_input(text: &str) -> &str {
    if text.len() <= MAX_SCAN_INPUT_LENGTH {
        return text;
    }
    let mut end = MAX_SCAN_INPUT_LENGTH;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// True for a non-empty run of ASCII digits
#[must_use]
pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a positive decimal number made only of ASCII digits.
/// Signs, whitespace and overflow are rejected.
#[must_use]
pub fn parse_number(s: &str) -> Option<u32> {
    if !is_all_digits(s) {
        return None;
    }
    s.parse().ok()
}

/// True for a single `1`, `2` or `3`, the ordinal prefix of books like "1 Kings"
#[must_use]
pub fn is_book_ordinal(s: &str) -> bool {
    matches!(s, "1" | "2" | "3")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_reference_length() {
        assert!(check_reference_length("John 3:16").is_none());
        assert!(check_reference_length(&"a".repeat(MAX_REFERENCE_LENGTH)).is_none());
        let msg = check_reference_length(&"a".repeat(MAX_REFERENCE_LENGTH + 1)).unwrap();
        assert!(msg.contains("exceeding the maximum"));
    }

    #[test]
    fn test_truncate_scan_input() {
        assert_eq!(truncate_scan_input("GEN 1:1"), "GEN 1:1");

        let long = "é".repeat(MAX_SCAN_INPUT_LENGTH);
        let cut = truncate_scan_input(&long);
        assert!(cut.len() <= MAX_SCAN_INPUT_LENGTH);
        assert!(cut.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("16"), Some(16));
        assert_eq!(parse_number("007"), Some(7));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("+3"), None);
        assert_eq!(parse_number("3a"), None);
        assert_eq!(parse_number(" 3"), None);
        assert_eq!(parse_number("99999999999"), None);
    }

    #[test]
    fn test_is_book_ordinal() {
        assert!(is_book_ordinal("1"));
        assert!(is_book_ordinal("3"));
        assert!(!is_book_ordinal("4"));
        assert!(!is_book_ordinal("12"));
    }
}
