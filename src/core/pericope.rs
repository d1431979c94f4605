use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::algebra::{math, set_ops};
use crate::catalog::canon::Canon;
use crate::core::book::Book;
use crate::core::error::ReferenceError;
use crate::core::range::VerseRange;
use crate::core::types::ReferenceFormat;
use crate::core::verse::VerseAddress;
use crate::parsing::format::format_pericope;
use crate::parsing::reference::ReferenceParser;
use crate::parsing::scan::scan_references;

/// A book-scoped, possibly discontinuous set of verses.
///
/// Values are immutable: every operation that looks like a mutation returns a new
/// pericope. Results of the set and math operations are always in canonical form
/// (ranges sorted, non-overlapping, non-adjacent), because they are all built by
/// [`Pericope::from_addresses`]. A pericope parsed from text keeps its ranges in the
/// order they were written.
///
/// Equality is semantic: two pericopes are equal when they name the same book and
/// cover the same verses, whatever their range lists look like.
#[derive(Clone)]
pub struct Pericope<'c> {
    canon: &'c Canon,
    book: &'c Book,
    ranges: Vec<VerseRange>,
}

impl<'c> Pericope<'c> {
    /// Parse a single reference such as `"GEN 1:1-3"` or `"1 Cor 13:4-7,13"`
    ///
    /// # Errors
    ///
    /// See [`ReferenceParser::parse`].
    pub fn parse(canon: &'c Canon, reference: &str) -> Result<Self, ReferenceError> {
        ReferenceParser::new(canon).parse(reference)
    }

    /// Extract every reference embedded in free text, skipping candidates that fail
    /// to parse
    pub fn scan(canon: &'c Canon, text: &str) -> Vec<Self> {
        scan_references(&ReferenceParser::new(canon), text)
    }

    /// Build a pericope from explicit ranges, validating every bound.
    ///
    /// # Errors
    ///
    /// Returns `InvalidChapter` or `InvalidVerse` for the first out-of-bounds bound
    /// (start chapter, end chapter, start verse, end verse, in that order).
    pub fn new(
        canon: &'c Canon,
        book: &'c Book,
        ranges: Vec<VerseRange>,
    ) -> Result<Self, ReferenceError> {
        for range in &ranges {
            validate_range(canon, book, range)?;
        }
        Ok(Self::from_parts(canon, book, ranges))
    }

    /// A pericope with no verses, still bound to `book`
    pub fn empty(canon: &'c Canon, book: &'c Book) -> Self {
        Self::from_parts(canon, book, Vec::new())
    }

    /// Every verse of `book` as a single range
    pub fn whole_book(canon: &'c Canon, book: &'c Book) -> Self {
        match (
            VerseAddress::first_of(canon, book),
            VerseAddress::last_of(canon, book),
        ) {
            (Some(first), Some(last)) => {
                Self::from_parts(canon, book, vec![range_between(&first, &last)])
            }
            _ => Self::empty(canon, book),
        }
    }

    /// Reduce a set of addresses to the minimal range representation.
    ///
    /// Addresses are sorted and deduplicated first; a run is extended while the next
    /// address is the `next()` of the run's end, and closed otherwise. Addresses from
    /// other books are ignored.
    pub fn from_addresses<I>(canon: &'c Canon, book: &'c Book, addresses: I) -> Self
    where
        I: IntoIterator<Item = VerseAddress<'c>>,
    {
        let sorted: BTreeSet<VerseAddress<'c>> = addresses
            .into_iter()
            .filter(|address| address.book() == book)
            .collect();

        let mut ranges = Vec::new();
        let mut iter = sorted.into_iter();
        if let Some(first) = iter.next() {
            let mut start = first;
            let mut end = first;
            for address in iter {
                if end.next() == Some(address) {
                    end = address;
                } else {
                    ranges.push(range_between(&start, &end));
                    start = address;
                    end = address;
                }
            }
            ranges.push(range_between(&start, &end));
        }

        Self::from_parts(canon, book, ranges)
    }

    /// Only for ranges already validated against `book`
    pub(crate) fn from_parts(canon: &'c Canon, book: &'c Book, ranges: Vec<VerseRange>) -> Self {
        Self {
            canon,
            book,
            ranges,
        }
    }

    pub fn canon(&self) -> &'c Canon {
        self.canon
    }

    pub fn book(&self) -> &'c Book {
        self.book
    }

    pub fn ranges(&self) -> &[VerseRange] {
        &self.ranges
    }

    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn is_single_verse(&self) -> bool {
        self.ranges.len() == 1 && self.ranges[0].is_single_verse()
    }

    pub fn is_single_chapter(&self) -> bool {
        self.ranges.iter().all(VerseRange::is_single_chapter)
    }

    pub fn spans_chapters(&self) -> bool {
        self.ranges.iter().any(VerseRange::spans_chapters)
    }

    /// All covered verses, sorted and deduplicated
    pub fn verses(&self) -> Vec<VerseAddress<'c>> {
        self.verse_set().into_iter().collect()
    }

    pub(crate) fn verse_set(&self) -> BTreeSet<VerseAddress<'c>> {
        let mut verses = BTreeSet::new();
        for range in &self.ranges {
            let (end_chapter, end_verse) = range.end();
            let mut current = Some(self.address(range.start_chapter, range.start_verse));
            while let Some(address) = current {
                verses.insert(address);
                if (address.chapter(), address.verse()) >= (end_chapter, end_verse) {
                    break;
                }
                current = address.next();
            }
        }
        verses
    }

    /// Number of distinct verses covered
    pub fn verse_count(&self) -> usize {
        self.verse_set().len()
    }

    /// Sorted list of chapters touched by any range
    pub fn chapter_list(&self) -> Vec<u32> {
        let chapters: BTreeSet<u32> = self
            .ranges
            .iter()
            .flat_map(|r| r.start_chapter..=r.end_chapter)
            .collect();
        chapters.into_iter().collect()
    }

    pub fn chapter_count(&self) -> usize {
        self.chapter_list().len()
    }

    /// Earliest verse covered
    pub fn first_verse(&self) -> Option<VerseAddress<'c>> {
        self.ranges
            .iter()
            .map(VerseRange::start)
            .min()
            .map(|(chapter, verse)| self.address(chapter, verse))
    }

    /// Latest verse covered
    pub fn last_verse(&self) -> Option<VerseAddress<'c>> {
        self.ranges
            .iter()
            .map(VerseRange::end)
            .max()
            .map(|(chapter, verse)| self.address(chapter, verse))
    }

    /// Render with the book code, e.g. `GEN 1:1-3,5`
    pub fn to_string_with(&self, format: ReferenceFormat) -> String {
        format_pericope(self, format)
    }

    // Set operations

    pub fn union(&self, other: &Self) -> Self {
        set_ops::union(self, other)
    }

    pub fn intersection(&self, other: &Self) -> Self {
        set_ops::intersection(self, other)
    }

    pub fn subtract(&self, other: &Self) -> Self {
        set_ops::subtract(self, other)
    }

    /// Verses of `scope` (or of the whole book) not covered by this pericope
    pub fn complement(&self, scope: Option<&Self>) -> Self {
        set_ops::complement(self, scope)
    }

    pub fn normalize(&self) -> Self {
        set_ops::normalize(self)
    }

    pub fn expand(&self, verses_before: usize, verses_after: usize) -> Self {
        set_ops::expand(self, verses_before, verses_after)
    }

    pub fn contract(&self, verses_from_start: usize, verses_from_end: usize) -> Self {
        set_ops::contract(self, verses_from_start, verses_from_end)
    }

    // Comparison

    pub fn intersects(&self, other: &Self) -> bool {
        math::intersects(self, other)
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.intersects(other)
    }

    pub fn contains(&self, other: &Self) -> bool {
        math::contains(self, other)
    }

    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        math::is_adjacent_to(self, other)
    }

    pub fn precedes(&self, other: &Self) -> bool {
        math::precedes(self, other)
    }

    pub fn follows(&self, other: &Self) -> bool {
        math::follows(self, other)
    }

    // Math

    pub fn gaps(&self) -> Vec<VerseAddress<'c>> {
        math::gaps(self)
    }

    pub fn continuous_ranges(&self) -> Vec<Self> {
        math::continuous_ranges(self)
    }

    pub fn density(&self) -> f64 {
        math::density(self)
    }

    pub fn verses_in_chapter(&self, chapter: u32) -> usize {
        math::verses_in_chapter(self, chapter)
    }

    pub fn chapters_in_range(&self) -> BTreeMap<u32, Vec<u32>> {
        math::chapters_in_range(self)
    }

    /// Bounds come from validated ranges
    fn address(&self, chapter: u32, verse: u32) -> VerseAddress<'c> {
        VerseAddress::new_unchecked(self.canon, self.book, chapter, verse)
    }
}

fn range_between(start: &VerseAddress<'_>, end: &VerseAddress<'_>) -> VerseRange {
    VerseRange {
        start_chapter: start.chapter(),
        start_verse: start.verse(),
        end_chapter: end.chapter(),
        end_verse: end.verse(),
    }
}

/// Check both ends of a range against the verse-count table
pub(crate) fn validate_range(
    canon: &Canon,
    book: &Book,
    range: &VerseRange,
) -> Result<(), ReferenceError> {
    for chapter in [range.start_chapter, range.end_chapter] {
        if !canon.is_valid_chapter(book, chapter) {
            return Err(ReferenceError::InvalidChapter {
                book: book.code.clone(),
                chapter,
            });
        }
    }
    for (chapter, verse) in [range.start(), range.end()] {
        if !canon.is_valid_verse(book, chapter, verse) {
            return Err(ReferenceError::InvalidVerse {
                book: book.code.clone(),
                chapter,
                verse,
            });
        }
    }
    if range.end() < range.start() {
        return Err(ReferenceError::parse_failure(
            range.to_string(),
            "range end precedes its start",
        ));
    }
    Ok(())
}

impl PartialEq for Pericope<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.book == other.book
            && (self.ranges == other.ranges || self.verse_set() == other.verse_set())
    }
}

impl Eq for Pericope<'_> {}

impl std::fmt::Display for Pericope<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_pericope(self, ReferenceFormat::Canonical))
    }
}

impl std::fmt::Debug for Pericope<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pericope")
            .field("book", &self.book.code)
            .field("ranges", &self.ranges)
            .finish()
    }
}

impl Serialize for Pericope<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Repr<'a> {
            book: &'a str,
            reference: String,
            ranges: &'a [VerseRange],
        }

        Repr {
            book: &self.book.code,
            reference: self.to_string(),
            ranges: &self.ranges,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canon() -> Canon {
        Canon::load_embedded().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let canon = canon();
        let p = Pericope::parse(&canon, "GEN 1:1-3").unwrap();
        assert_eq!(p.book().code, "GEN");
        assert_eq!(p.verse_count(), 3);
        assert_eq!(p.to_string(), "GEN 1:1-3");
    }

    #[test]
    fn test_verses_walk_chapter_boundary() {
        let canon = canon();
        let p = Pericope::parse(&canon, "GEN 1:30-2:2").unwrap();
        let verses: Vec<String> = p.verses().iter().map(ToString::to_string).collect();
        assert_eq!(verses, ["GEN 1:30", "GEN 1:31", "GEN 2:1", "GEN 2:2"]);
    }

    #[test]
    fn test_counting() {
        let canon = canon();
        let p = Pericope::parse(&canon, "GEN 1:1-3").unwrap();
        assert!(!p.is_empty());
        assert!(!p.is_single_verse());
        assert!(Pericope::parse(&canon, "GEN 1:1").unwrap().is_single_verse());

        let p = Pericope::parse(&canon, "GEN 1:1-3:1").unwrap();
        assert_eq!(p.chapter_list(), vec![1, 2, 3]);
        assert_eq!(p.chapter_count(), 3);
        assert!(p.spans_chapters());
        assert!(!p.is_single_chapter());
        assert_eq!(p.verse_count(), 31 + 25 + 1);
    }

    #[test]
    fn test_first_and_last_verse_ignore_written_order() {
        let canon = canon();
        let p = Pericope::parse(&canon, "GEN 3:5,1:2-4").unwrap();
        assert_eq!(p.first_verse().unwrap().to_string(), "GEN 1:2");
        assert_eq!(p.last_verse().unwrap().to_string(), "GEN 3:5");
    }

    #[test]
    fn test_from_addresses_is_minimal() {
        let canon = canon();
        let gen = canon.book("GEN").unwrap();
        let addresses = [(1, 3), (1, 1), (1, 2), (1, 31), (2, 1), (1, 2), (2, 5)]
            .into_iter()
            .map(|(c, v)| VerseAddress::new(&canon, gen, c, v).unwrap());
        let p = Pericope::from_addresses(&canon, gen, addresses);
        assert_eq!(p.to_string(), "GEN 1:1-3,1:31-2:1,2:5");
        assert_eq!(p.range_count(), 3);
    }

    #[test]
    fn test_from_addresses_ignores_other_books() {
        let canon = canon();
        let gen = canon.book("GEN").unwrap();
        let mat = VerseAddress::from_code(&canon, "MAT", 1, 1).unwrap();
        let p = Pericope::from_addresses(&canon, gen, [mat]);
        assert!(p.is_empty());
        assert_eq!(p.to_string(), "");
    }

    #[test]
    fn test_new_validates_ranges() {
        let canon = canon();
        let gen = canon.book("GEN").unwrap();
        assert!(Pericope::new(&canon, gen, vec![VerseRange::single(1, 1)]).is_ok());
        assert!(matches!(
            Pericope::new(&canon, gen, vec![VerseRange::single(51, 1)]),
            Err(ReferenceError::InvalidChapter { chapter: 51, .. })
        ));
        assert!(matches!(
            Pericope::new(&canon, gen, vec![VerseRange::single(1, 32)]),
            Err(ReferenceError::InvalidVerse { verse: 32, .. })
        ));
    }

    #[test]
    fn test_whole_book() {
        let canon = canon();
        let oba = canon.book("OBA").unwrap();
        let p = Pericope::whole_book(&canon, oba);
        assert_eq!(p.to_string(), "OBA 1:1-21");
        assert_eq!(p.verse_count(), 21);
    }

    #[test]
    fn test_semantic_equality() {
        let canon = canon();
        let a = Pericope::parse(&canon, "GEN 1:1-3,4-6").unwrap();
        let b = Pericope::parse(&canon, "GEN 1:1-6").unwrap();
        let c = Pericope::parse(&canon, "EXO 1:1-6").unwrap();
        assert_eq!(a, b);
        assert_ne!(b, c);
        assert_ne!(a.ranges(), b.ranges());
    }

    #[test]
    fn test_serialize() {
        let canon = canon();
        let p = Pericope::parse(&canon, "GEN 1:1-3").unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["book"], "GEN");
        assert_eq!(json["reference"], "GEN 1:1-3");
        assert_eq!(json["ranges"][0]["end_verse"], 3);
    }
}
