use std::collections::HashMap;

use crate::core::book::Book;

/// Default maximum edit distance for approximate book-name matching
pub const DEFAULT_FUZZY_MAX_DISTANCE: usize = 2;

/// Inputs shorter than this are never matched approximately
pub const DEFAULT_FUZZY_MIN_LENGTH: usize = 3;

/// Case-insensitive alias table mapping every book name, code and alias to a book index.
///
/// Entries keep catalog order (book by book, name first, then code, then aliases) so the
/// approximate scan is deterministic: the first alias reaching the minimum distance wins.
/// The approximate scan is a plain linear pass over every alias; the table holds a few
/// hundred entries, so no secondary index is kept.
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    /// Lowercased alias -> book index, in insertion order
    entries: Vec<(String, usize)>,

    /// Lowercased alias -> position in `entries`
    lookup: HashMap<String, usize>,
}

impl AliasIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index over all books, in catalog order
    pub fn build(books: &[Book]) -> Self {
        let mut index = Self::new();
        for (idx, book) in books.iter().enumerate() {
            index.insert(idx, book);
        }
        index
    }

    /// Register a book's name, code and aliases. An alias already claimed by an
    /// earlier book keeps its first owner.
    pub fn insert(&mut self, book_index: usize, book: &Book) {
        let names = std::iter::once(&book.name)
            .chain(std::iter::once(&book.code))
            .chain(book.aliases.iter());

        for name in names {
            let key = name.trim().to_lowercase();
            if key.is_empty() || self.lookup.contains_key(&key) {
                continue;
            }
            self.lookup.insert(key.clone(), self.entries.len());
            self.entries.push((key, book_index));
        }
    }

    /// Exact, case-insensitive alias lookup
    pub fn exact(&self, name: &str) -> Option<usize> {
        let key = name.trim().to_lowercase();
        self.lookup.get(&key).map(|&pos| self.entries[pos].1)
    }

    /// Nearest alias by Levenshtein distance.
    ///
    /// Returns `(book_index, distance)` of the first alias at the minimum distance, as
    /// long as that distance is at most `max_distance`. Inputs shorter than `min_length`
    /// characters never match.
    pub fn nearest(
        &self,
        name: &str,
        max_distance: usize,
        min_length: usize,
    ) -> Option<(usize, usize)> {
        let key = name.trim().to_lowercase();
        if key.chars().count() < min_length {
            return None;
        }

        let mut best: Option<(usize, usize)> = None;
        for (alias, book_index) in &self.entries {
            let distance = strsim::levenshtein(&key, alias);
            if distance > max_distance {
                continue;
            }
            if best.map_or(true, |(_, best_distance)| distance < best_distance) {
                best = Some((*book_index, distance));
                if distance == 0 {
                    break;
                }
            }
        }
        best
    }

    /// Iterate over `(lowercased alias, book index)` pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(alias, idx)| (alias.as_str(), *idx))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Testament;

    fn books() -> Vec<Book> {
        vec![
            Book::new("EXO", 2, "Exodus", Testament::Old, 40).with_aliases(["Exod", "Ex"]),
            Book::new("MAT", 40, "Matthew", Testament::New, 28).with_aliases(["Matt", "Mt"]),
            Book::new("MRK", 41, "Mark", Testament::New, 16).with_aliases(["Mk", "Mt"]),
        ]
    }

    #[test]
    fn test_exact_lookup_is_case_insensitive() {
        let index = AliasIndex::build(&books());
        assert_eq!(index.exact("exodus"), Some(0));
        assert_eq!(index.exact("  MATT "), Some(1));
        assert_eq!(index.exact("mrk"), Some(2));
        assert_eq!(index.exact("Luke"), None);
    }

    #[test]
    fn test_duplicate_alias_keeps_first_owner() {
        let index = AliasIndex::build(&books());
        assert_eq!(index.exact("mt"), Some(1));
    }

    #[test]
    fn test_nearest_within_threshold() {
        let index = AliasIndex::build(&books());
        assert_eq!(index.nearest("Exodos", 2, 3), Some((0, 1)));
        assert_eq!(index.nearest("Mathew", 2, 3), Some((1, 1)));
        assert_eq!(index.nearest("Leviticus", 2, 3), None);
    }

    #[test]
    fn test_nearest_respects_min_length() {
        let index = AliasIndex::build(&books());
        // "Mx" is one edit from "Mk" and "Mt" but too short to be matched approximately
        assert_eq!(index.nearest("Mx", 2, 3), None);
    }

    #[test]
    fn test_nearest_first_best_wins() {
        let index = AliasIndex::build(&books());
        // "Marx" is distance 1 from "mark" and distance 2 from "matt"
        assert_eq!(index.nearest("Marx", 2, 3), Some((2, 1)));
        // "Mak" is distance 1 from both "mat" and "mark"; "mat" is registered first
        assert_eq!(index.nearest("Mak", 2, 3), Some((1, 1)));
    }
}
