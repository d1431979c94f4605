use crate::core::pericope::Pericope;
use crate::core::verse::VerseAddress;

/// Pericopes are only comparable within one book
fn same_book(pericope: &Pericope<'_>, other: &Pericope<'_>) -> bool {
    pericope.book() == other.book()
}

fn rebuild<'c>(
    pericope: &Pericope<'c>,
    verses: impl IntoIterator<Item = VerseAddress<'c>>,
) -> Pericope<'c> {
    Pericope::from_addresses(pericope.canon(), pericope.book(), verses)
}

/// All verses of both pericopes.
/// Returns `pericope` unchanged when the books differ.
#[must_use]
pub fn union<'c>(pericope: &Pericope<'c>, other: &Pericope<'c>) -> Pericope<'c> {
    if !same_book(pericope, other) {
        return pericope.clone();
    }
    let mut verses = pericope.verse_set();
    verses.extend(other.verse_set());
    rebuild(pericope, verses)
}

/// Verses present in both pericopes.
/// Returns an empty pericope when the books differ.
#[must_use]
pub fn intersection<'c>(pericope: &Pericope<'c>, other: &Pericope<'c>) -> Pericope<'c> {
    if !same_book(pericope, other) {
        return Pericope::empty(pericope.canon(), pericope.book());
    }
    let other_verses = other.verse_set();
    let common = pericope
        .verse_set()
        .into_iter()
        .filter(|v| other_verses.contains(v));
    rebuild(pericope, common)
}

/// Verses of `pericope` that are not in `other`.
/// Returns `pericope` unchanged when the books differ.
#[must_use]
pub fn subtract<'c>(pericope: &Pericope<'c>, other: &Pericope<'c>) -> Pericope<'c> {
    if !same_book(pericope, other) {
        return pericope.clone();
    }
    let other_verses = other.verse_set();
    let remaining = pericope
        .verse_set()
        .into_iter()
        .filter(|v| !other_verses.contains(v));
    rebuild(pericope, remaining)
}

/// Verses of `scope` not covered by `pericope`.
///
/// Without a scope, or with a scope from another book, the scope is every verse of
/// the pericope's book.
#[must_use]
pub fn complement<'c>(pericope: &Pericope<'c>, scope: Option<&Pericope<'c>>) -> Pericope<'c> {
    let scope_verses = match scope {
        Some(scope) if same_book(pericope, scope) => scope.verse_set(),
        _ => Pericope::whole_book(pericope.canon(), pericope.book()).verse_set(),
    };
    let covered = pericope.verse_set();
    let outside = scope_verses.into_iter().filter(|v| !covered.contains(v));
    rebuild(pericope, outside)
}

/// Merge duplicate, overlapping and adjacent ranges into the canonical form
#[must_use]
pub fn normalize<'c>(pericope: &Pericope<'c>) -> Pericope<'c> {
    rebuild(pericope, pericope.verse_set())
}

/// Add up to `verses_before` verses before the first verse and up to `verses_after`
/// verses after the last one, stopping early at the book boundaries
#[must_use]
pub fn expand<'c>(
    pericope: &Pericope<'c>,
    verses_before: usize,
    verses_after: usize,
) -> Pericope<'c> {
    let mut verses = pericope.verse_set();

    let mut current = pericope.first_verse();
    for _ in 0..verses_before {
        match current.and_then(|v| v.previous()) {
            Some(prev) => {
                verses.insert(prev);
                current = Some(prev);
            }
            None => break,
        }
    }

    let mut current = pericope.last_verse();
    for _ in 0..verses_after {
        match current.and_then(|v| v.next()) {
            Some(next) => {
                verses.insert(next);
                current = Some(next);
            }
            None => break,
        }
    }

    rebuild(pericope, verses)
}

/// Drop the first `verses_from_start` and last `verses_from_end` verses.
/// Returns an empty pericope when nothing would remain.
#[must_use]
pub fn contract<'c>(
    pericope: &Pericope<'c>,
    verses_from_start: usize,
    verses_from_end: usize,
) -> Pericope<'c> {
    let verses: Vec<VerseAddress<'c>> = pericope.verses();
    let dropped = verses_from_start.saturating_add(verses_from_end);
    if verses.len() <= dropped {
        return Pericope::empty(pericope.canon(), pericope.book());
    }
    let kept = &verses[verses_from_start..verses.len() - verses_from_end];
    rebuild(pericope, kept.iter().copied())
}
