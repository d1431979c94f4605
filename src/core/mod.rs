//! Core data types for scripture references.
//!
//! - [`Book`]: one catalog entry (code, number, name, testament, chapters, aliases)
//! - [`VerseAddress`]: a validated, totally ordered `(book, chapter, verse)` coordinate
//! - [`VerseRange`]: a closed `chapter:verse` interval within one book
//! - [`Pericope`]: a book-scoped set of verses stored as a list of ranges
//! - [`ReferenceError`]: the errors raised while resolving references
//!
//! ## Ordering
//!
//! Addresses compare by book number, then chapter, then verse. The dense ordinal
//! encodes the same order as a single integer:
//!
//! | Address | Ordinal |
//! |---------|---------|
//! | GEN 1:1 | 1001001 |
//! | MAT 5:3 | 40005003 |
//! | REV 22:21 | 66022021 |
//!
//! [`Book`]: book::Book
//! [`VerseAddress`]: verse::VerseAddress
//! [`VerseRange`]: range::VerseRange
//! [`Pericope`]: pericope::Pericope
//! [`ReferenceError`]: error::ReferenceError

pub mod book;
pub mod error;
pub mod pericope;
pub mod range;
pub mod types;
pub mod verse;
