//! Book catalog and verse-count table.
//!
//! Both tables are static reference data. The default English data is compiled into
//! the binary (validated by `build.rs`), but custom tables can be loaded from JSON
//! files, which is also how tests build small synthetic catalogs.
//!
//! - [`store::BookCatalog`]: books by code, number, exact alias and approximate name
//! - [`versification::Versification`]: verses per chapter for every book
//! - [`canon::Canon`]: the two tables together, checked for agreement
//!
//! ## Example
//!
//! ```rust,no_run
//! use pericope::Canon;
//!
//! let canon = Canon::load_embedded().unwrap();
//!
//! let genesis = canon.catalog().find_by_name("Genesis").unwrap();
//! assert_eq!(canon.verse_count(genesis, 1), Some(31));
//!
//! // Approximate matching tolerates small misspellings
//! let exodus = canon.catalog().find_by_name("Exodos").unwrap();
//! assert_eq!(exodus.code, "EXO");
//! ```

pub mod canon;
pub mod index;
pub mod store;
pub mod versification;
