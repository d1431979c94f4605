use serde::{Deserialize, Serialize};

use crate::core::types::Testament;

/// A single book of the corpus as described by the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Three-character identifier, unique within the catalog (e.g. "GEN", "1CO")
    pub code: String,

    /// Canonical position, the primary ordering key
    pub number: u32,

    /// Display name (e.g. "1 Corinthians")
    pub name: String,

    pub testament: Testament,

    /// Number of chapters in the book
    pub chapter_count: u32,

    /// Case-insensitive match strings, including the name and the code
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Book {
    pub fn new(
        code: impl Into<String>,
        number: u32,
        name: impl Into<String>,
        testament: Testament,
        chapter_count: u32,
    ) -> Self {
        Self {
            code: code.into(),
            number,
            name: name.into(),
            testament,
            chapter_count,
            aliases: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_old_testament(&self) -> bool {
        self.testament == Testament::Old
    }

    pub fn is_new_testament(&self) -> bool {
        self.testament == Testament::New
    }

    /// Check if the input names this book (case-insensitive against code, name and aliases)
    pub fn matches(&self, input: &str) -> bool {
        let input = input.trim();
        if input.is_empty() {
            return false;
        }
        self.code.eq_ignore_ascii_case(input)
            || self.name.eq_ignore_ascii_case(input)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(input))
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Book {}

impl std::hash::Hash for Book {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genesis() -> Book {
        Book::new("GEN", 1, "Genesis", Testament::Old, 50).with_aliases([
            "Genesis", "Gen", "GEN", "Ge",
        ])
    }

    #[test]
    fn test_matches_aliases() {
        let book = genesis();
        assert!(book.matches("Genesis"));
        assert!(book.matches("gen"));
        assert!(book.matches("GE"));
        assert!(!book.matches("Matthew"));
        assert!(!book.matches(""));
    }

    #[test]
    fn test_equality_by_code() {
        let a = genesis();
        let b = Book::new("GEN", 1, "Bereshit", Testament::Old, 50);
        let c = Book::new("EXO", 2, "Exodus", Testament::Old, 40);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_testament_helpers() {
        let book = genesis();
        assert!(book.is_old_testament());
        assert!(!book.is_new_testament());
        assert_eq!(book.to_string(), "GEN");
    }
}
