use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::index::{AliasIndex, DEFAULT_FUZZY_MAX_DISTANCE, DEFAULT_FUZZY_MIN_LENGTH};
use crate::core::book::Book;
use crate::core::types::{Testament, MAX_BOOK_NUMBER, MAX_SEGMENT_COUNT};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate book in catalog: {0}")]
    DuplicateBook(String),

    #[error("Inconsistent catalog data: {0}")]
    Inconsistent(String),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub books: Vec<Book>,
}

/// The book catalog with its lookup indexes
#[derive(Debug, Default)]
pub struct BookCatalog {
    /// All books, in canonical order
    books: Vec<Book>,

    /// Index: uppercase code -> index in books vec
    code_to_index: HashMap<String, usize>,

    /// Index: book number -> index in books vec
    number_to_index: HashMap<u32, usize>,

    /// Index: lowercase name/code/alias -> index in books vec
    aliases: AliasIndex,
}

impl BookCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/books.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "Catalog version mismatch"
            );
        }

        Self::from_books(data.books)
    }

    /// Build a catalog from books, sorted by their canonical number
    pub fn from_books(mut books: Vec<Book>) -> Result<Self, CatalogError> {
        books.sort_by_key(|b| b.number);

        let mut catalog = Self::new();
        for book in books {
            catalog.add_book(book)?;
        }
        debug!(books = catalog.len(), aliases = catalog.aliases.len(), "Loaded book catalog");
        Ok(catalog)
    }

    /// Add a book to the catalog
    fn add_book(&mut self, mut book: Book) -> Result<(), CatalogError> {
        book.code = book.code.trim().to_uppercase();
        if !(1..=MAX_BOOK_NUMBER).contains(&book.number) {
            return Err(CatalogError::Inconsistent(format!(
                "{} has number {}, expected 1..={MAX_BOOK_NUMBER}",
                book.code, book.number
            )));
        }
        if !(1..=MAX_SEGMENT_COUNT).contains(&book.chapter_count) {
            return Err(CatalogError::Inconsistent(format!(
                "{} has {} chapters, expected 1..={MAX_SEGMENT_COUNT}",
                book.code, book.chapter_count
            )));
        }
        if self.code_to_index.contains_key(&book.code) {
            return Err(CatalogError::DuplicateBook(book.code));
        }
        if self.number_to_index.contains_key(&book.number) {
            return Err(CatalogError::DuplicateBook(format!(
                "{} (number {})",
                book.code, book.number
            )));
        }

        let index = self.books.len();
        self.code_to_index.insert(book.code.clone(), index);
        self.number_to_index.insert(book.number, index);
        self.aliases.insert(index, &book);
        self.books.push(book);
        Ok(())
    }

    /// Find a book by its code (case-insensitive)
    pub fn find_by_code(&self, code: &str) -> Option<&Book> {
        self.code_to_index
            .get(&code.trim().to_uppercase())
            .map(|&idx| &self.books[idx])
    }

    /// Find a book by its canonical number
    pub fn find_by_number(&self, number: u32) -> Option<&Book> {
        self.number_to_index.get(&number).map(|&idx| &self.books[idx])
    }

    /// Find a book by exact (case-insensitive) name, code or alias
    pub fn find_by_exact_alias(&self, name: &str) -> Option<&Book> {
        self.aliases.exact(name).map(|idx| &self.books[idx])
    }

    /// Find the book whose alias is nearest to `name` using the default thresholds
    pub fn find_by_approximate_name(&self, name: &str) -> Option<&Book> {
        self.find_by_approximate_name_within(
            name,
            DEFAULT_FUZZY_MAX_DISTANCE,
            DEFAULT_FUZZY_MIN_LENGTH,
        )
    }

    /// Find the book whose alias is nearest to `name`, within `max_distance` edits
    pub fn find_by_approximate_name_within(
        &self,
        name: &str,
        max_distance: usize,
        min_length: usize,
    ) -> Option<&Book> {
        let (idx, distance) = self.aliases.nearest(name, max_distance, min_length)?;
        let book = &self.books[idx];
        debug!(input = name, book = %book.code, distance, "Approximate book match");
        Some(book)
    }

    /// Exact alias lookup, falling back to approximate matching
    pub fn find_by_name(&self, name: &str) -> Option<&Book> {
        if name.trim().is_empty() {
            return None;
        }
        self.find_by_exact_alias(name)
            .or_else(|| self.find_by_approximate_name(name))
    }

    /// Resolve any name form to the book's code
    pub fn normalize_name(&self, name: &str) -> Option<&str> {
        self.find_by_name(name).map(|b| b.code.as_str())
    }

    /// All books in canonical order
    pub fn all_books(&self) -> &[Book] {
        &self.books
    }

    /// Books belonging to one testament, in canonical order
    pub fn testament_books(&self, testament: Testament) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| b.testament == testament)
            .collect()
    }

    /// The alias index backing name lookups
    pub fn aliases(&self) -> &AliasIndex {
        &self.aliases
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            books: self.books.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of books in catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = BookCatalog::load_embedded().unwrap();
        assert_eq!(catalog.len(), 66);
        assert_eq!(catalog.all_books()[0].code, "GEN");
        assert_eq!(catalog.all_books()[65].code, "REV");
    }

    #[test]
    fn test_find_by_code() {
        let catalog = BookCatalog::load_embedded().unwrap();
        let gen = catalog.find_by_code("gen").unwrap();
        assert_eq!(gen.name, "Genesis");
        let mat = catalog.find_by_code("MAT").unwrap();
        assert_eq!(mat.name, "Matthew");
        assert!(mat.is_new_testament());
        assert!(catalog.find_by_code("INVALID").is_none());
        assert!(catalog.find_by_code("").is_none());
    }

    #[test]
    fn test_find_by_number() {
        let catalog = BookCatalog::load_embedded().unwrap();
        assert_eq!(catalog.find_by_number(1).unwrap().code, "GEN");
        assert_eq!(catalog.find_by_number(40).unwrap().code, "MAT");
        assert!(catalog.find_by_number(0).is_none());
        assert!(catalog.find_by_number(100).is_none());
    }

    #[test]
    fn test_find_by_name() {
        let catalog = BookCatalog::load_embedded().unwrap();
        assert_eq!(catalog.normalize_name("Genesis"), Some("GEN"));
        assert_eq!(catalog.normalize_name("gen"), Some("GEN"));
        assert_eq!(catalog.normalize_name("1 Corinthians"), Some("1CO"));
        assert_eq!(catalog.normalize_name("First Corinthians"), Some("1CO"));
        assert_eq!(catalog.normalize_name("Psalm"), Some("PSA"));
        assert_eq!(catalog.normalize_name("Invalid Book"), None);
        assert_eq!(catalog.normalize_name(""), None);
    }

    #[test]
    fn test_find_by_approximate_name() {
        let catalog = BookCatalog::load_embedded().unwrap();
        assert_eq!(catalog.find_by_exact_alias("Exodos"), None);
        assert_eq!(catalog.normalize_name("Exodos"), Some("EXO"));
        assert_eq!(catalog.normalize_name("Revelaton"), Some("REV"));
        assert_eq!(catalog.normalize_name("Deutoronomy"), Some("DEU"));
        // Too short to be matched approximately
        assert!(catalog.find_by_approximate_name("Gx").is_none());
    }

    #[test]
    fn test_testament_books() {
        let catalog = BookCatalog::load_embedded().unwrap();
        let old = catalog.testament_books(Testament::Old);
        let new = catalog.testament_books(Testament::New);
        assert_eq!(old.len(), 39);
        assert_eq!(new.len(), 27);
        assert_eq!(new[0].code, "MAT");
    }

    #[test]
    fn test_catalog_to_json() {
        let catalog = BookCatalog::load_embedded().unwrap();
        let json = catalog.to_json().unwrap();
        assert!(json.contains("\"version\""));
        assert!(json.contains("\"books\""));

        let reloaded = BookCatalog::from_json(&json).unwrap();
        assert_eq!(reloaded.len(), catalog.len());
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let books = vec![
            Book::new("GEN", 1, "Genesis", Testament::Old, 50),
            Book::new("gen", 2, "Genesis Again", Testament::Old, 50),
        ];
        let result = BookCatalog::from_books(books);
        assert!(matches!(result, Err(CatalogError::DuplicateBook(_))));
    }

    #[test]
    fn test_book_number_out_of_range_rejected() {
        for number in [0, 1000, 5000] {
            let books = vec![Book::new("ZZZ", number, "Zed", Testament::New, 1)];
            let result = BookCatalog::from_books(books);
            assert!(matches!(result, Err(CatalogError::Inconsistent(_))), "number {number}");
        }
        let books = vec![Book::new("ZZZ", 999, "Zed", Testament::New, 1)];
        assert!(BookCatalog::from_books(books).is_ok());
    }

    #[test]
    fn test_chapter_count_out_of_range_rejected() {
        for chapters in [0, 1000] {
            let books = vec![Book::new("ZZZ", 1, "Zed", Testament::New, chapters)];
            let result = BookCatalog::from_books(books);
            assert!(matches!(result, Err(CatalogError::Inconsistent(_))), "{chapters} chapters");
        }
    }
}
