use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::warn;

use crate::catalog::store::{CatalogError, CATALOG_VERSION};
use crate::core::types::MAX_SEGMENT_COUNT;

/// Serializable verse-count table format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersificationData {
    pub version: String,

    /// Name of the segmentation scheme (e.g. "english")
    pub system: String,

    /// Book code -> verse count of each chapter, chapter 1 first
    pub chapters: BTreeMap<String, Vec<u32>>,
}

/// Per-book, per-chapter verse counts
#[derive(Debug, Clone, Default)]
pub struct Versification {
    system: String,
    chapters: HashMap<String, Vec<u32>>,
}

impl Versification {
    /// Load the embedded English verse-count table
    pub fn load_embedded() -> Result<Self, CatalogError> {
        const EMBEDDED_VERSIFICATION: &str = include_str!("../../catalogs/versification.json");
        Self::from_json(EMBEDDED_VERSIFICATION)
    }

    /// Load a verse-count table from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a verse-count table from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: VersificationData = serde_json::from_str(json)?;

        if data.version != CATALOG_VERSION {
            warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "Versification version mismatch"
            );
        }

        Self::from_data(data)
    }

    pub fn from_data(data: VersificationData) -> Result<Self, CatalogError> {
        let mut chapters = HashMap::with_capacity(data.chapters.len());
        for (code, counts) in data.chapters {
            if counts.is_empty() || counts.len() > MAX_SEGMENT_COUNT as usize {
                return Err(CatalogError::Inconsistent(format!(
                    "{code} has {} chapters, expected 1..={MAX_SEGMENT_COUNT}",
                    counts.len()
                )));
            }
            if let Some(chapter) = counts.iter().position(|&c| c > MAX_SEGMENT_COUNT) {
                return Err(CatalogError::Inconsistent(format!(
                    "{code} chapter {} has {} verses, expected at most {MAX_SEGMENT_COUNT}",
                    chapter + 1,
                    counts[chapter]
                )));
            }
            if let Some(chapter) = counts.iter().position(|&c| c == 0) {
                return Err(CatalogError::Inconsistent(format!(
                    "{code} chapter {} has no verses",
                    chapter + 1
                )));
            }
            chapters.insert(code.trim().to_uppercase(), counts);
        }

        Ok(Self {
            system: data.system,
            chapters,
        })
    }

    /// Name of the segmentation scheme
    pub fn system(&self) -> &str {
        &self.system
    }

    /// Verse counts of every chapter of a book
    pub fn chapters(&self, code: &str) -> Option<&[u32]> {
        self.chapters.get(&code.to_uppercase()).map(Vec::as_slice)
    }

    /// Number of chapters in a book
    pub fn chapter_count(&self, code: &str) -> Option<u32> {
        self.chapters(code).map(|c| c.len() as u32)
    }

    /// Number of verses in one chapter of a book.
    /// Returns None for unknown books and out-of-range chapters.
    pub fn verse_count(&self, code: &str, chapter: u32) -> Option<u32> {
        let index = usize::try_from(chapter).ok()?.checked_sub(1)?;
        self.chapters(code)?.get(index).copied()
    }

    /// Total number of verses in a book
    pub fn total_verses(&self, code: &str) -> Option<u32> {
        self.chapters(code).map(|c| c.iter().sum())
    }

    pub fn is_valid_chapter(&self, code: &str, chapter: u32) -> bool {
        self.verse_count(code, chapter).is_some()
    }

    pub fn is_valid_verse(&self, code: &str, chapter: u32, verse: u32) -> bool {
        self.verse_count(code, chapter)
            .is_some_and(|count| (1..=count).contains(&verse))
    }

    /// Number of books with verse counts
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verse_counts() {
        let v = Versification::load_embedded().unwrap();
        assert_eq!(v.system(), "english");
        assert_eq!(v.verse_count("GEN", 1), Some(31));
        assert_eq!(v.verse_count("GEN", 2), Some(25));
        assert_eq!(v.verse_count("GEN", 50), Some(26));
        assert_eq!(v.verse_count("MAT", 5), Some(48));
        assert_eq!(v.verse_count("PSA", 119), Some(176));
    }

    #[test]
    fn test_invalid_lookups() {
        let v = Versification::load_embedded().unwrap();
        assert_eq!(v.verse_count("INVALID", 1), None);
        assert_eq!(v.verse_count("GEN", 0), None);
        assert_eq!(v.verse_count("GEN", 51), None);
        assert_eq!(v.total_verses("INVALID"), None);
    }

    #[test]
    fn test_total_verses() {
        let v = Versification::load_embedded().unwrap();
        assert_eq!(v.total_verses("GEN"), Some(1533));
        assert_eq!(v.total_verses("MAT"), Some(1071));
        assert_eq!(v.total_verses("OBA"), Some(21));
    }

    #[test]
    fn test_validity_checks() {
        let v = Versification::load_embedded().unwrap();
        assert!(v.is_valid_chapter("GEN", 1));
        assert!(v.is_valid_chapter("GEN", 50));
        assert!(!v.is_valid_chapter("GEN", 0));
        assert!(!v.is_valid_chapter("GEN", 51));
        assert!(v.is_valid_verse("GEN", 1, 31));
        assert!(!v.is_valid_verse("GEN", 1, 0));
        assert!(!v.is_valid_verse("GEN", 1, 32));
    }

    #[test]
    fn test_data_integrity() {
        let v = Versification::load_embedded().unwrap();
        assert_eq!(v.len(), 66);
        assert_eq!(v.chapter_count("PSA"), Some(150));
        assert_eq!(v.chapter_count("gen"), Some(50));
    }

    #[test]
    fn test_zero_verse_chapter_rejected() {
        let json = r#"{"version": "1.0.0", "system": "test", "chapters": {"AAA": [3, 0]}}"#;
        assert!(matches!(
            Versification::from_json(json),
            Err(CatalogError::Inconsistent(_))
        ));
    }

    #[test]
    fn test_oversized_chapter_rejected() {
        // 1000 verses would collide with the next chapter's ordinals
        let json = r#"{"version": "1.0.0", "system": "test", "chapters": {"AAA": [1001, 3]}}"#;
        assert!(matches!(
            Versification::from_json(json),
            Err(CatalogError::Inconsistent(_))
        ));

        let json = r#"{"version": "1.0.0", "system": "test", "chapters": {"AAA": [999, 3]}}"#;
        let v = Versification::from_json(json).unwrap();
        assert_eq!(v.verse_count("AAA", 1), Some(999));
    }

    #[test]
    fn test_chapter_count_bounds() {
        let json = r#"{"version": "1.0.0", "system": "test", "chapters": {"AAA": []}}"#;
        assert!(matches!(
            Versification::from_json(json),
            Err(CatalogError::Inconsistent(_))
        ));

        let data = VersificationData {
            version: "1.0.0".to_string(),
            system: "test".to_string(),
            chapters: BTreeMap::from([("AAA".to_string(), vec![1; 1000])]),
        };
        assert!(matches!(
            Versification::from_data(data),
            Err(CatalogError::Inconsistent(_))
        ));
    }
}
