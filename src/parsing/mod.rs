//! Conversion between reference text and [`Pericope`] values.
//!
//! - [`reference`]: parse a single reference (`"1 Cor 13:4-7,13"`)
//! - [`format`]: render a pericope with its book code or full name
//! - [`scan`]: extract references embedded in prose
//! - [`complete`]: autocomplete for partially typed references
//!
//! [`TextProcessor`] bundles all four behind one value.
//!
//! ## Example
//!
//! ```rust
//! use pericope::{Canon, ReferenceFormat, TextProcessor};
//!
//! let canon = Canon::load_embedded().unwrap();
//! let processor = TextProcessor::new(&canon);
//!
//! let p = processor.parse("John 3:16-18").unwrap();
//! assert_eq!(p.to_string(), "JHN 3:16-18");
//! assert_eq!(processor.format(&p, ReferenceFormat::FullName), "John 3:16-18");
//!
//! let found = processor.scan("Compare GEN 1:1 with JHN 1:1.");
//! assert_eq!(found.len(), 2);
//!
//! assert_eq!(processor.suggest_completions("John 3"), vec!["John 3:"]);
//! ```
//!
//! ## Range grammar
//!
//! | Text | Meaning |
//! |------|---------|
//! | `1:1` | chapter 1, verse 1 |
//! | `1:1-3` | verses 1 to 3 of chapter 1 |
//! | `1:30-2:2` | across a chapter boundary |
//! | `1:1,3,5` | bare verses reuse the previous chapter |
//! | `2` | chapter 2, verse 1 |
//! | (nothing) | `1:1` |

pub mod complete;
pub mod format;
pub mod reference;
pub mod scan;

use crate::catalog::canon::Canon;
use crate::core::error::ReferenceError;
use crate::core::pericope::Pericope;
use crate::core::types::ReferenceFormat;

use complete::{suggest_completions, CompletionConfig};
use reference::{ParserConfig, ReferenceParser};

/// Parse, scan, format and autocomplete against one [`Canon`]
pub struct TextProcessor<'c> {
    parser: ReferenceParser<'c>,
    completion: CompletionConfig,
}

impl<'c> TextProcessor<'c> {
    pub fn new(canon: &'c Canon) -> Self {
        Self::with_config(canon, ParserConfig::default(), CompletionConfig::default())
    }

    pub fn with_config(
        canon: &'c Canon,
        parser_config: ParserConfig,
        completion: CompletionConfig,
    ) -> Self {
        Self {
            parser: ReferenceParser::with_config(canon, parser_config),
            completion,
        }
    }

    pub fn parser(&self) -> &ReferenceParser<'c> {
        &self.parser
    }

    /// Parse a single reference
    ///
    /// # Errors
    ///
    /// See [`ReferenceParser::parse`].
    pub fn parse(&self, reference: &str) -> Result<Pericope<'c>, ReferenceError> {
        self.parser.parse(reference)
    }

    /// Extract every parseable reference from free text
    pub fn scan(&self, text: &str) -> Vec<Pericope<'c>> {
        scan::scan_references(&self.parser, text)
    }

    pub fn format(&self, pericope: &Pericope<'_>, format: ReferenceFormat) -> String {
        format::format_pericope(pericope, format)
    }

    pub fn suggest_completions(&self, input: &str) -> Vec<String> {
        suggest_completions(&self.parser, input, &self.completion)
    }
}
