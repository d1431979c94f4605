use serde::{Deserialize, Serialize};

/// A closed `chapter:verse` interval within one book. Both ends are inclusive and the
/// range may span chapters. The start never follows the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseRange {
    pub start_chapter: u32,
    pub start_verse: u32,
    pub end_chapter: u32,
    pub end_verse: u32,
}

impl VerseRange {
    /// Returns None if the end precedes the start
    pub fn new(start_chapter: u32, start_verse: u32, end_chapter: u32, end_verse: u32) -> Option<Self> {
        if (end_chapter, end_verse) < (start_chapter, start_verse) {
            return None;
        }
        Some(Self {
            start_chapter,
            start_verse,
            end_chapter,
            end_verse,
        })
    }

    pub fn single(chapter: u32, verse: u32) -> Self {
        Self {
            start_chapter: chapter,
            start_verse: verse,
            end_chapter: chapter,
            end_verse: verse,
        }
    }

    pub fn start(&self) -> (u32, u32) {
        (self.start_chapter, self.start_verse)
    }

    pub fn end(&self) -> (u32, u32) {
        (self.end_chapter, self.end_verse)
    }

    pub fn is_single_verse(&self) -> bool {
        self.start() == self.end()
    }

    pub fn is_single_chapter(&self) -> bool {
        self.start_chapter == self.end_chapter
    }

    pub fn spans_chapters(&self) -> bool {
        !self.is_single_chapter()
    }

    pub fn contains_chapter(&self, chapter: u32) -> bool {
        (self.start_chapter..=self.end_chapter).contains(&chapter)
    }
}

/// Renders `C:V`, `C:V-V'` or `C:V-C':V'`
impl std::fmt::Display for VerseRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_single_verse() {
            write!(f, "{}:{}", self.start_chapter, self.start_verse)
        } else if self.is_single_chapter() {
            write!(
                f,
                "{}:{}-{}",
                self.start_chapter, self.start_verse, self.end_verse
            )
        } else {
            write!(
                f,
                "{}:{}-{}:{}",
                self.start_chapter, self.start_verse, self.end_chapter, self.end_verse
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_range_rejected() {
        assert!(VerseRange::new(1, 5, 1, 3).is_none());
        assert!(VerseRange::new(2, 1, 1, 31).is_none());
        assert!(VerseRange::new(1, 31, 2, 1).is_some());
    }

    #[test]
    fn test_display() {
        assert_eq!(VerseRange::single(1, 1).to_string(), "1:1");
        assert_eq!(VerseRange::new(1, 1, 1, 3).unwrap().to_string(), "1:1-3");
        assert_eq!(VerseRange::new(1, 1, 2, 3).unwrap().to_string(), "1:1-2:3");
    }

    #[test]
    fn test_shape_predicates() {
        let r = VerseRange::new(1, 30, 3, 2).unwrap();
        assert!(r.spans_chapters());
        assert!(!r.is_single_verse());
        assert!(r.contains_chapter(2));
        assert!(!r.contains_chapter(4));
    }
}
