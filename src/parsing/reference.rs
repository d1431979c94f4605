use tracing::debug;

use crate::catalog::canon::Canon;
use crate::catalog::index::{DEFAULT_FUZZY_MAX_DISTANCE, DEFAULT_FUZZY_MIN_LENGTH};
use crate::core::book::Book;
use crate::core::error::ReferenceError;
use crate::core::pericope::{validate_range, Pericope};
use crate::core::range::VerseRange;
use crate::utils::validation::{check_reference_length, is_book_ordinal, parse_number};

/// Most words a book name can span ("Song of Solomon", "Gospel of John")
const MAX_BOOK_NAME_WORDS: usize = 4;

/// Range text used when a reference names only a book
const DEFAULT_RANGE: &str = "1:1";

/// Book-name resolution thresholds
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Largest edit distance accepted by the approximate book lookup
    pub fuzzy_max_distance: usize,
    /// Shortest input the approximate lookup will consider
    pub fuzzy_min_length: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            fuzzy_max_distance: DEFAULT_FUZZY_MAX_DISTANCE,
            fuzzy_min_length: DEFAULT_FUZZY_MIN_LENGTH,
        }
    }
}

/// Turns reference text such as `"1 Cor 13:4-7,13"` into a [`Pericope`].
///
/// Grammar: `<book> [<range>(,<range>)*]` where a range is `[C:]V` or `<point>-<point>`.
/// A bare verse number reuses the chapter established by the previous item; a bare
/// number in first position is a chapter. Every bound is validated against the
/// verse-count table and the first violation aborts the parse.
pub struct ReferenceParser<'c> {
    canon: &'c Canon,
    config: ParserConfig,
}

impl<'c> ReferenceParser<'c> {
    pub fn new(canon: &'c Canon) -> Self {
        Self::with_config(canon, ParserConfig::default())
    }

    pub fn with_config(canon: &'c Canon, config: ParserConfig) -> Self {
        Self { canon, config }
    }

    pub fn canon(&self) -> &'c Canon {
        self.canon
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse one reference.
    ///
    /// # Errors
    ///
    /// - `ParseFailure` for empty or oversized input and malformed range text
    /// - `InvalidBook` if no book name can be resolved
    /// - `InvalidChapter` / `InvalidVerse` for the first out-of-bounds bound
    pub fn parse(&self, reference: &str) -> Result<Pericope<'c>, ReferenceError> {
        let trimmed = reference.trim();
        if trimmed.is_empty() {
            return Err(ReferenceError::parse_failure(reference, "empty reference"));
        }
        if let Some(msg) = check_reference_length(trimmed) {
            return Err(ReferenceError::parse_failure(
                truncate_for_message(trimmed),
                msg,
            ));
        }

        let words: Vec<&str> = trimmed.split_whitespace().collect();
        let (book, consumed) = self
            .split_book(&words)
            .ok_or_else(|| ReferenceError::InvalidBook(unresolved_book_text(&words)))?;

        let rest = words[consumed..].join(" ");
        let range_text = if rest.is_empty() {
            DEFAULT_RANGE
        } else {
            rest.as_str()
        };

        let ranges = self.parse_ranges(book, range_text)?;
        debug!(reference = trimmed, book = %book.code, ranges = ranges.len(), "Parsed reference");
        Ok(Pericope::from_parts(self.canon, book, ranges))
    }

    /// Resolve a book name by exact alias, then by approximate match
    pub fn resolve_book(&self, name: &str) -> Option<&'c Book> {
        let catalog = self.canon.catalog();
        if name.trim().is_empty() {
            return None;
        }
        catalog.find_by_exact_alias(name).or_else(|| {
            catalog.find_by_approximate_name_within(
                name,
                self.config.fuzzy_max_distance,
                self.config.fuzzy_min_length,
            )
        })
    }

    /// Find the book named by the leading words and how many words it used.
    ///
    /// The longest leading run of words that is an exact alias wins. Otherwise the
    /// approximate lookup is tried on "N word" (for a leading 1, 2 or 3) and then on
    /// the first word alone.
    pub(crate) fn split_book(&self, words: &[&str]) -> Option<(&'c Book, usize)> {
        let catalog = self.canon.catalog();
        let longest = words.len().min(MAX_BOOK_NAME_WORDS);
        for count in (1..=longest).rev() {
            if let Some(book) = catalog.find_by_exact_alias(&words[..count].join(" ")) {
                return Some((book, count));
            }
        }

        if words.len() > 1 && is_book_ordinal(words[0]) {
            if let Some(book) = self.resolve_book(&format!("{} {}", words[0], words[1])) {
                return Some((book, 2));
            }
        }
        let first = words.first()?;
        self.resolve_book(first).map(|book| (book, 1))
    }

    /// Parse the comma-separated range list that follows the book name
    ///
    /// # Errors
    ///
    /// Same as [`ReferenceParser::parse`], minus book resolution.
    pub fn parse_ranges(
        &self,
        book: &'c Book,
        text: &str,
    ) -> Result<Vec<VerseRange>, ReferenceError> {
        let mut ranges = Vec::new();
        let mut chapter_context: Option<u32> = None;

        for item in text.split(',') {
            let item = item.trim();
            if item.is_empty() {
                return Err(ReferenceError::parse_failure(text, "empty range item"));
            }
            let range = parse_item(item, chapter_context)?;
            validate_range(self.canon, book, &range)?;
            chapter_context = Some(range.start_chapter);
            ranges.push(range);
        }

        Ok(ranges)
    }
}

/// Parse `[C:]V` or `<point>-<point>` into an unvalidated range
fn parse_item(item: &str, chapter_context: Option<u32>) -> Result<VerseRange, ReferenceError> {
    let sides: Vec<&str> = item.split('-').map(str::trim).collect();
    let (start, end) = match sides.as_slice() {
        [single] => {
            let point = parse_point(single, chapter_context)?;
            (point, point)
        }
        [start_text, end_text] => {
            let start = parse_point(start_text, chapter_context)?;
            let end = if end_text.contains(':') {
                parse_point(end_text, Some(start.0))?
            } else {
                (start.0, parse_component(end_text, item)?)
            };
            (start, end)
        }
        _ => return Err(ReferenceError::parse_failure(item, "more than one '-' in range")),
    };

    Ok(VerseRange {
        start_chapter: start.0,
        start_verse: start.1,
        end_chapter: end.0,
        end_verse: end.1,
    })
}

/// Resolve one side of a range to `(chapter, verse)`
fn parse_point(text: &str, chapter_context: Option<u32>) -> Result<(u32, u32), ReferenceError> {
    if let Some((chapter, verse)) = text.split_once(':') {
        return Ok((
            parse_component(chapter.trim(), text)?,
            parse_component(verse.trim(), text)?,
        ));
    }
    let number = parse_component(text, text)?;
    Ok(match chapter_context {
        Some(chapter) => (chapter, number),
        None => (number, 1),
    })
}

fn parse_component(component: &str, context: &str) -> Result<u32, ReferenceError> {
    parse_number(component).ok_or_else(|| {
        let reason = if component.is_empty() {
            "missing number".to_string()
        } else {
            format!("'{component}' is not a number")
        };
        ReferenceError::parse_failure(context, reason)
    })
}

/// The text reported by `InvalidBook`: "N word" for ordinal books, else the first word
fn unresolved_book_text(words: &[&str]) -> String {
    match words {
        [ordinal, name, ..] if is_book_ordinal(ordinal) => format!("{ordinal} {name}"),
        [first, ..] => (*first).to_string(),
        [] => String::new(),
    }
}

fn truncate_for_message(text: &str) -> String {
    text.chars().take(64).collect::<String>() + "..."
}
