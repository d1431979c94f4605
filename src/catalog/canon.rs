use std::path::Path;

use crate::catalog::store::{BookCatalog, CatalogError};
use crate::catalog::versification::Versification;
use crate::core::book::Book;

/// The book catalog paired with its verse-count table.
///
/// Built once and shared by reference with every address, pericope and parser
/// that needs to resolve books or chapter boundaries. Nothing mutates it after
/// construction, so a single instance can be shared freely across threads.
pub struct Canon {
    catalog: BookCatalog,
    versification: Versification,
}

impl Canon {
    /// Pair a catalog with a verse-count table, checking that they agree on every book
    pub fn new(catalog: BookCatalog, versification: Versification) -> Result<Self, CatalogError> {
        for book in catalog.all_books() {
            let chapters = versification.chapter_count(&book.code).ok_or_else(|| {
                CatalogError::Inconsistent(format!("no verse counts for {}", book.code))
            })?;
            if chapters != book.chapter_count {
                return Err(CatalogError::Inconsistent(format!(
                    "{} has {} chapters in the catalog but {} in the verse table",
                    book.code, book.chapter_count, chapters
                )));
            }
        }

        Ok(Self {
            catalog,
            versification,
        })
    }

    /// Load the embedded catalog and verse-count table
    pub fn load_embedded() -> Result<Self, CatalogError> {
        Self::new(BookCatalog::load_embedded()?, Versification::load_embedded()?)
    }

    /// Load data files, falling back to the embedded data for any path not given
    pub fn load(books: Option<&Path>, versification: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match books {
            Some(path) => BookCatalog::load_from_file(path)?,
            None => BookCatalog::load_embedded()?,
        };
        let versification = match versification {
            Some(path) => Versification::load_from_file(path)?,
            None => Versification::load_embedded()?,
        };
        Self::new(catalog, versification)
    }

    /// Parse both tables from JSON strings
    pub fn from_json(books: &str, versification: &str) -> Result<Self, CatalogError> {
        Self::new(
            BookCatalog::from_json(books)?,
            Versification::from_json(versification)?,
        )
    }

    pub fn catalog(&self) -> &BookCatalog {
        &self.catalog
    }

    pub fn versification(&self) -> &Versification {
        &self.versification
    }

    /// Look up a book by code
    pub fn book(&self, code: &str) -> Option<&Book> {
        self.catalog.find_by_code(code)
    }

    /// Number of verses in a chapter of `book`
    pub fn verse_count(&self, book: &Book, chapter: u32) -> Option<u32> {
        self.versification.verse_count(&book.code, chapter)
    }

    pub fn total_verses(&self, book: &Book) -> u32 {
        self.versification.total_verses(&book.code).unwrap_or(0)
    }

    pub fn is_valid_chapter(&self, book: &Book, chapter: u32) -> bool {
        (1..=book.chapter_count).contains(&chapter)
            && self.versification.is_valid_chapter(&book.code, chapter)
    }

    pub fn is_valid_verse(&self, book: &Book, chapter: u32, verse: u32) -> bool {
        self.is_valid_chapter(book, chapter)
            && self.versification.is_valid_verse(&book.code, chapter, verse)
    }
}

impl std::fmt::Debug for Canon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canon")
            .field("books", &self.catalog.len())
            .field("system", &self.versification.system())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOKS: &str = r#"{
        "version": "1.0.0",
        "created_at": "2026-01-01T00:00:00Z",
        "books": [
            {"code": "AAA", "number": 1, "name": "Alpha", "testament": "old", "chapter_count": 2, "aliases": ["Alp"]},
            {"code": "BBB", "number": 2, "name": "Beta", "testament": "new", "chapter_count": 1, "aliases": []}
        ]
    }"#;

    #[test]
    fn test_synthetic_canon() {
        let verses = r#"{"version": "1.0.0", "system": "test", "chapters": {"AAA": [3, 2], "BBB": [4]}}"#;
        let canon = Canon::from_json(BOOKS, verses).unwrap();
        let alpha = canon.book("aaa").unwrap();
        assert_eq!(canon.verse_count(alpha, 2), Some(2));
        assert_eq!(canon.total_verses(alpha), 5);
        assert!(canon.is_valid_verse(alpha, 1, 3));
        assert!(!canon.is_valid_verse(alpha, 2, 3));
        assert!(!canon.is_valid_chapter(alpha, 3));
    }

    #[test]
    fn test_chapter_count_mismatch_rejected() {
        let verses = r#"{"version": "1.0.0", "system": "test", "chapters": {"AAA": [3], "BBB": [4]}}"#;
        assert!(matches!(
            Canon::from_json(BOOKS, verses),
            Err(CatalogError::Inconsistent(_))
        ));
    }

    #[test]
    fn test_missing_verse_table_rejected() {
        let verses = r#"{"version": "1.0.0", "system": "test", "chapters": {"AAA": [3, 2]}}"#;
        assert!(matches!(
            Canon::from_json(BOOKS, verses),
            Err(CatalogError::Inconsistent(_))
        ));
    }

    #[test]
    fn test_tables_beyond_ordinal_range_rejected() {
        let verses = r#"{"version": "1.0.0", "system": "test", "chapters": {"AAA": [1001, 3], "BBB": [4]}}"#;
        assert!(matches!(
            Canon::from_json(BOOKS, verses),
            Err(CatalogError::Inconsistent(_))
        ));

        let books = BOOKS.replace(r#""number": 2"#, r#""number": 5000"#);
        let verses = r#"{"version": "1.0.0", "system": "test", "chapters": {"AAA": [3, 2], "BBB": [4]}}"#;
        assert!(matches!(
            Canon::from_json(&books, verses),
            Err(CatalogError::Inconsistent(_))
        ));
    }

    #[test]
    fn test_embedded_canon() {
        let canon = Canon::load_embedded().unwrap();
        let gen = canon.book("GEN").unwrap();
        assert_eq!(canon.verse_count(gen, 1), Some(31));
        assert_eq!(canon.total_verses(gen), 1533);
    }
}
