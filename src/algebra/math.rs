//! Predicates and measurements over pericopes.
//!
//! Every predicate is `false` when the two pericopes name different books.

use std::collections::BTreeMap;

use crate::core::pericope::Pericope;
use crate::core::verse::VerseAddress;

/// Convert count to f64 for ratio calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

fn same_book(pericope: &Pericope<'_>, other: &Pericope<'_>) -> bool {
    pericope.book() == other.book()
}

/// True if any verse is shared
pub fn intersects(pericope: &Pericope<'_>, other: &Pericope<'_>) -> bool {
    if !same_book(pericope, other) {
        return false;
    }
    let verses = pericope.verse_set();
    other.verse_set().iter().any(|v| verses.contains(v))
}

/// True if every verse of `other` is in `pericope`. An empty `other` is always contained.
pub fn contains(pericope: &Pericope<'_>, other: &Pericope<'_>) -> bool {
    if !same_book(pericope, other) {
        return false;
    }
    other.verse_set().is_subset(&pericope.verse_set())
}

/// True if one pericope ends on the verse right before the other begins
pub fn is_adjacent_to(pericope: &Pericope<'_>, other: &Pericope<'_>) -> bool {
    if !same_book(pericope, other) {
        return false;
    }
    let joins = |left: &Pericope<'_>, right: &Pericope<'_>| {
        match (left.last_verse(), right.first_verse()) {
            (Some(last), Some(first)) => last.next() == Some(first),
            _ => false,
        }
    };
    joins(pericope, other) || joins(other, pericope)
}

/// True if `pericope` ends before `other` starts
pub fn precedes(pericope: &Pericope<'_>, other: &Pericope<'_>) -> bool {
    if !same_book(pericope, other) {
        return false;
    }
    match (pericope.last_verse(), other.first_verse()) {
        (Some(last), Some(first)) => last < first,
        _ => false,
    }
}

/// True if `pericope` starts after `other` ends
pub fn follows(pericope: &Pericope<'_>, other: &Pericope<'_>) -> bool {
    if !same_book(pericope, other) {
        return false;
    }
    match (pericope.first_verse(), other.last_verse()) {
        (Some(first), Some(last)) => first > last,
        _ => false,
    }
}

/// Verses between the first and last verse that the pericope does not cover
pub fn gaps<'c>(pericope: &Pericope<'c>) -> Vec<VerseAddress<'c>> {
    let (Some(first), Some(last)) = (pericope.first_verse(), pericope.last_verse()) else {
        return Vec::new();
    };
    let covered = pericope.verse_set();

    let mut missing = Vec::new();
    let mut current = first.next();
    while let Some(address) = current {
        if address >= last {
            break;
        }
        if !covered.contains(&address) {
            missing.push(address);
        }
        current = address.next();
    }
    missing
}

/// Split into maximal runs of consecutive verses, one pericope per run
pub fn continuous_ranges<'c>(pericope: &Pericope<'c>) -> Vec<Pericope<'c>> {
    let mut runs: Vec<Vec<VerseAddress<'c>>> = Vec::new();
    for address in pericope.verse_set() {
        let extends_run = runs
            .last()
            .and_then(|run| run.last())
            .and_then(VerseAddress::next)
            == Some(address);
        if extends_run {
            if let Some(run) = runs.last_mut() {
                run.push(address);
            }
        } else {
            runs.push(vec![address]);
        }
    }

    runs.into_iter()
        .map(|run| Pericope::from_addresses(pericope.canon(), pericope.book(), run))
        .collect()
}

/// Share of the touched chapters' verses that the pericope covers, in `[0, 1]`
pub fn density(pericope: &Pericope<'_>) -> f64 {
    let covered = pericope.verse_count();
    if covered == 0 {
        return 0.0;
    }
    let canon = pericope.canon();
    let available: u32 = pericope
        .chapter_list()
        .into_iter()
        .filter_map(|chapter| canon.verse_count(pericope.book(), chapter))
        .sum();
    if available == 0 {
        return 0.0;
    }
    count_to_f64(covered) / f64::from(available)
}

/// Number of covered verses in `chapter`; 0 for chapters outside the book
pub fn verses_in_chapter(pericope: &Pericope<'_>, chapter: u32) -> usize {
    if !pericope.canon().is_valid_chapter(pericope.book(), chapter) {
        return 0;
    }
    pericope
        .verse_set()
        .iter()
        .filter(|v| v.chapter() == chapter)
        .count()
}

/// Covered verse numbers grouped by chapter
pub fn chapters_in_range(pericope: &Pericope<'_>) -> BTreeMap<u32, Vec<u32>> {
    let mut chapters: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
    for address in pericope.verse_set() {
        chapters
            .entry(address.chapter())
            .or_default()
            .push(address.verse());
    }
    chapters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::canon::Canon;

    fn canon() -> Canon {
        Canon::load_embedded().unwrap()
    }

    fn p<'c>(canon: &'c Canon, reference: &str) -> Pericope<'c> {
        Pericope::parse(canon, reference).unwrap()
    }

    #[test]
    fn test_intersects() {
        let canon = canon();
        assert!(intersects(&p(&canon, "GEN 1:1-5"), &p(&canon, "GEN 1:5-10")));
        assert!(!intersects(&p(&canon, "GEN 1:1-4"), &p(&canon, "GEN 1:5-10")));
        assert!(!intersects(&p(&canon, "GEN 1:1-5"), &p(&canon, "EXO 1:1-5")));
    }

    #[test]
    fn test_contains() {
        let canon = canon();
        let outer = p(&canon, "GEN 1:1-2:5");
        assert!(contains(&outer, &p(&canon, "GEN 1:31-2:1")));
        assert!(!contains(&outer, &p(&canon, "GEN 2:5-6")));
        assert!(!contains(&outer, &p(&canon, "EXO 1:1")));

        let gen = canon.book("GEN").unwrap();
        assert!(contains(&outer, &Pericope::empty(&canon, gen)));
    }

    #[test]
    fn test_is_adjacent_to() {
        let canon = canon();
        let a = p(&canon, "GEN 1:20-31");
        let b = p(&canon, "GEN 2:1-3");
        assert!(is_adjacent_to(&a, &b));
        assert!(is_adjacent_to(&b, &a));
        assert!(!is_adjacent_to(&a, &p(&canon, "GEN 2:2-3")));
        assert!(!is_adjacent_to(&a, &p(&canon, "EXO 2:1")));
    }

    #[test]
    fn test_precedes_and_follows() {
        let canon = canon();
        let a = p(&canon, "GEN 1:1-5");
        let b = p(&canon, "GEN 1:6-10");
        assert!(precedes(&a, &b));
        assert!(!precedes(&b, &a));
        assert!(follows(&b, &a));
        assert!(!follows(&a, &b));

        let overlapping = p(&canon, "GEN 1:5-6");
        assert!(!precedes(&a, &overlapping));
        assert!(!follows(&overlapping, &a));

        let gen = canon.book("GEN").unwrap();
        assert!(!precedes(&a, &Pericope::empty(&canon, gen)));
        assert!(!precedes(&a, &p(&canon, "EXO 1:1")));
    }

    #[test]
    fn test_gaps() {
        let canon = canon();
        let missing: Vec<String> = gaps(&p(&canon, "GEN 1:1,3,5"))
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(missing, ["GEN 1:2", "GEN 1:4"]);

        assert!(gaps(&p(&canon, "GEN 1:1")).is_empty());
        assert!(gaps(&p(&canon, "GEN 1:1-10")).is_empty());

        let across: Vec<String> = gaps(&p(&canon, "GEN 1:30,2:2"))
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(across, ["GEN 1:31", "GEN 2:1"]);
    }

    #[test]
    fn test_continuous_ranges() {
        let canon = canon();
        let runs: Vec<String> = continuous_ranges(&p(&canon, "GEN 1:1-3,5-7,10"))
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(runs, ["GEN 1:1-3", "GEN 1:5-7", "GEN 1:10"]);

        let runs = continuous_ranges(&p(&canon, "GEN 1:30-31,2:1"));
        assert_eq!(runs.len(), 1);

        let gen = canon.book("GEN").unwrap();
        assert!(continuous_ranges(&Pericope::empty(&canon, gen)).is_empty());
    }

    #[test]
    fn test_density() {
        let canon = canon();
        let whole_chapter = p(&canon, "GEN 1:1-31");
        assert!((density(&whole_chapter) - 1.0).abs() < f64::EPSILON);

        let part = p(&canon, "OBA 1:1-7");
        assert!((density(&part) - 7.0 / 21.0).abs() < 1e-9);

        let gen = canon.book("GEN").unwrap();
        assert!(density(&Pericope::empty(&canon, gen)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_verses_in_chapter() {
        let canon = canon();
        let a = p(&canon, "GEN 1:29-2:3");
        assert_eq!(verses_in_chapter(&a, 1), 3);
        assert_eq!(verses_in_chapter(&a, 2), 3);
        assert_eq!(verses_in_chapter(&a, 3), 0);
        assert_eq!(verses_in_chapter(&a, 0), 0);
        assert_eq!(verses_in_chapter(&a, 51), 0);
    }

    #[test]
    fn test_chapters_in_range() {
        let canon = canon();
        let grouped = chapters_in_range(&p(&canon, "GEN 1:30-2:2,3:4"));
        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped[&1], vec![30, 31]);
        assert_eq!(grouped[&2], vec![1, 2]);
        assert_eq!(grouped[&3], vec![4]);
    }
}
