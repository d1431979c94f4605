//! # pericope
//!
//! A library for resolving, representing and combining references to passages of
//! scripture.
//!
//! References like "John 3:16-18" or "1 Cor 13:4-7,13" are parsed against a catalog
//! of 66 books and an English verse-count table. The result is a [`Pericope`]: an
//! immutable, book-scoped set of verses stored as a minimal list of ranges.
//!
//! ## Features
//!
//! - **Forgiving book names**: codes, names, aliases and near misses ("Genisis")
//! - **Strict validation**: every chapter and verse is checked against the verse table
//! - **Set algebra**: union, intersection, subtraction, complement, expansion
//! - **Analysis**: gaps, continuous runs, density, per-chapter counts
//! - **Free-text scanning**: pull references out of prose
//! - **Autocomplete**: suggestions for partially typed references
//!
//! ## Example
//!
//! ```rust
//! use pericope::{Canon, Pericope};
//!
//! // Load the embedded catalog and verse table once, then share it by reference
//! let canon = Canon::load_embedded().unwrap();
//!
//! let a = Pericope::parse(&canon, "GEN 1:1-10").unwrap();
//! let b = Pericope::parse(&canon, "Genesis 1:5-15").unwrap();
//!
//! assert_eq!(a.union(&b).to_string(), "GEN 1:1-15");
//! assert_eq!(a.intersection(&b).to_string(), "GEN 1:5-10");
//! assert_eq!(a.subtract(&b).to_string(), "GEN 1:1-4");
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Book catalog, verse-count table and the [`Canon`] pairing them
//! - [`core`]: Books, verse addresses, ranges and pericopes
//! - [`algebra`]: Set operations and measurements over pericopes
//! - [`parsing`]: Parsing, formatting, scanning and autocomplete
//! - [`cli`]: Command-line interface implementation

pub mod algebra;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::canon::Canon;
pub use catalog::store::{BookCatalog, CatalogError};
pub use catalog::versification::Versification;
pub use core::book::Book;
pub use core::error::ReferenceError;
pub use core::pericope::Pericope;
pub use core::range::VerseRange;
pub use core::types::*;
pub use core::verse::VerseAddress;
pub use parsing::complete::CompletionConfig;
pub use parsing::reference::{ParserConfig, ReferenceParser};
pub use parsing::TextProcessor;
