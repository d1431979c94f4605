use std::cmp::Ordering;

use crate::catalog::canon::Canon;
use crate::core::book::Book;
use crate::core::error::ReferenceError;
use crate::core::types::{BOOK_FACTOR, CHAPTER_FACTOR};

/// A validated `(book, chapter, verse)` coordinate.
///
/// An address can only be obtained through validating constructors or through
/// navigation from another address, so every value in circulation points at a
/// verse that exists in the verse-count table.
///
/// Addresses are totally ordered by book number, then chapter, then verse. The dense
/// ordinal `book * 1_000_000 + chapter * 1_000 + verse` is monotonic with that order;
/// it assumes chapter and verse numbers stay below 1000, which `build.rs` checks for
/// the embedded data.
#[derive(Clone, Copy)]
pub struct VerseAddress<'c> {
    canon: &'c Canon,
    book: &'c Book,
    chapter: u32,
    verse: u32,
}

impl<'c> VerseAddress<'c> {
    /// Create an address, validating chapter and verse against the verse-count table
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError::InvalidChapter` if the chapter is outside the book, or
    /// `ReferenceError::InvalidVerse` if the verse is outside the chapter.
    pub fn new(
        canon: &'c Canon,
        book: &'c Book,
        chapter: u32,
        verse: u32,
    ) -> Result<Self, ReferenceError> {
        if !canon.is_valid_chapter(book, chapter) {
            return Err(ReferenceError::InvalidChapter {
                book: book.code.clone(),
                chapter,
            });
        }
        if !canon.is_valid_verse(book, chapter, verse) {
            return Err(ReferenceError::InvalidVerse {
                book: book.code.clone(),
                chapter,
                verse,
            });
        }
        Ok(Self::new_unchecked(canon, book, chapter, verse))
    }

    /// Create an address from a book code
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError::InvalidBook` if the code is not in the catalog, otherwise
    /// the same errors as [`VerseAddress::new`].
    pub fn from_code(
        canon: &'c Canon,
        code: &str,
        chapter: u32,
        verse: u32,
    ) -> Result<Self, ReferenceError> {
        let book = canon
            .book(code)
            .ok_or_else(|| ReferenceError::InvalidBook(code.to_string()))?;
        Self::new(canon, book, chapter, verse)
    }

    /// Decode a dense ordinal back into an address
    pub fn from_ordinal(canon: &'c Canon, ordinal: u32) -> Option<Self> {
        let book = canon.catalog().find_by_number(ordinal / BOOK_FACTOR)?;
        let chapter = (ordinal % BOOK_FACTOR) / CHAPTER_FACTOR;
        let verse = ordinal % CHAPTER_FACTOR;
        Self::new(canon, book, chapter, verse).ok()
    }

    /// First verse of a book
    pub fn first_of(canon: &'c Canon, book: &'c Book) -> Option<Self> {
        Self::new(canon, book, 1, 1).ok()
    }

    /// Last verse of a book
    pub fn last_of(canon: &'c Canon, book: &'c Book) -> Option<Self> {
        let chapter = book.chapter_count;
        let verse = canon.verse_count(book, chapter)?;
        Self::new(canon, book, chapter, verse).ok()
    }

    /// Only for coordinates already known to be in bounds
    pub(crate) fn new_unchecked(
        canon: &'c Canon,
        book: &'c Book,
        chapter: u32,
        verse: u32,
    ) -> Self {
        Self {
            canon,
            book,
            chapter,
            verse,
        }
    }

    pub fn canon(&self) -> &'c Canon {
        self.canon
    }

    pub fn book(&self) -> &'c Book {
        self.book
    }

    pub fn chapter(&self) -> u32 {
        self.chapter
    }

    pub fn verse(&self) -> u32 {
        self.verse
    }

    /// Dense integer encoding, monotonic with the address order
    pub fn to_ordinal(&self) -> u32 {
        self.book.number * BOOK_FACTOR + self.chapter * CHAPTER_FACTOR + self.verse
    }

    /// The following verse, rolling into the next chapter.
    /// Returns None at the last verse of the book.
    pub fn next(&self) -> Option<Self> {
        let last_in_chapter = self.canon.verse_count(self.book, self.chapter)?;
        if self.verse < last_in_chapter {
            Some(self.moved_to(self.chapter, self.verse + 1))
        } else if self.chapter < self.book.chapter_count {
            Some(self.moved_to(self.chapter + 1, 1))
        } else {
            None
        }
    }

    /// The preceding verse, rolling back to the last verse of the previous chapter.
    /// Returns None at the first verse of the book.
    pub fn previous(&self) -> Option<Self> {
        if self.verse > 1 {
            Some(self.moved_to(self.chapter, self.verse - 1))
        } else if self.chapter > 1 {
            let chapter = self.chapter - 1;
            let verse = self.canon.verse_count(self.book, chapter)?;
            Some(self.moved_to(chapter, verse))
        } else {
            None
        }
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    fn moved_to(&self, chapter: u32, verse: u32) -> Self {
        Self::new_unchecked(self.canon, self.book, chapter, verse)
    }
}

impl PartialEq for VerseAddress<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.to_ordinal() == other.to_ordinal()
    }
}

impl Eq for VerseAddress<'_> {}

impl PartialOrd for VerseAddress<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VerseAddress<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_ordinal().cmp(&other.to_ordinal())
    }
}

impl std::hash::Hash for VerseAddress<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_ordinal().hash(state);
    }
}

impl std::fmt::Display for VerseAddress<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}:{}", self.book.code, self.chapter, self.verse)
    }
}

impl std::fmt::Debug for VerseAddress<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VerseAddress({self})")
    }
}
