//! Autocomplete for partially typed references.
//!
//! The mode depends on how much of the reference has been typed:
//!
//! | Input | Suggestions |
//! |-------|-------------|
//! | `""` | a fixed list of common books |
//! | `"Gen"` | book names starting with the input |
//! | `"John"` | the first chapters of the book |
//! | `"Psalm 11"` | chapters extending the digits, else `"Psalm 11:"` |
//! | `"John 3:"` | the first verses of the chapter |
//! | `"John 3:1"` | verses extending the digits, else range and list continuations |

use std::collections::BTreeSet;

use crate::core::book::Book;
use crate::parsing::reference::ReferenceParser;
use crate::utils::validation::{is_book_ordinal, parse_number};

/// Books suggested before anything has been typed
pub const DEFAULT_BOOK_SUGGESTIONS: [&str; 8] = [
    "Genesis", "Exodus", "Matthew", "Mark", "Luke", "John", "Acts", "Romans",
];

/// Suggestion limits
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Cap on book, chapter and verse-digit completions
    pub max_suggestions: usize,
    /// Cap on the verse list offered right after a chapter's colon
    pub max_verse_listing: usize,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 10,
            max_verse_listing: 20,
        }
    }
}

/// Suggest completions for `input`. Returns an empty list when nothing fits.
pub fn suggest_completions(
    parser: &ReferenceParser<'_>,
    input: &str,
    config: &CompletionConfig,
) -> Vec<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return DEFAULT_BOOK_SUGGESTIONS
            .iter()
            .map(ToString::to_string)
            .collect();
    }

    let words: Vec<&str> = trimmed.split_whitespace().collect();
    let partial_book = match words.as_slice() {
        [single] => Some((*single).to_string()),
        [ordinal, name] if is_book_ordinal(ordinal) => Some(format!("{ordinal} {name}")),
        _ => None,
    };
    if let Some(partial) = partial_book {
        if let Some(names) = book_name_completions(parser, &partial, config.max_suggestions) {
            return names;
        }
    }

    let Some((book, consumed)) = parser.split_book(&words) else {
        return Vec::new();
    };
    let prefix = display_prefix(book, &words[..consumed].join(" "));
    let content = words[consumed..].join(" ");

    match content.split_once(':') {
        None => chapter_completions(parser, book, &prefix, &content, config),
        Some((chapter, verse)) => verse_completions(parser, book, &prefix, chapter, verse, config),
    }
}

/// Names of books whose name or an alias starts with `partial`.
///
/// Returns None when the input is already a complete book name that no other book
/// extends, so the caller moves on to chapter suggestions.
fn book_name_completions(
    parser: &ReferenceParser<'_>,
    partial: &str,
    limit: usize,
) -> Option<Vec<String>> {
    let query = partial.to_lowercase();
    let matches: Vec<&Book> = parser
        .canon()
        .catalog()
        .all_books()
        .iter()
        .filter(|book| {
            book.name.to_lowercase().starts_with(&query)
                || book
                    .aliases
                    .iter()
                    .any(|alias| alias.to_lowercase().starts_with(&query))
        })
        .collect();

    if matches.is_empty() {
        return None;
    }
    let is_full_name = matches.iter().any(|book| book.name.to_lowercase() == query);
    if matches.len() == 1 && is_full_name {
        return None;
    }

    let mut seen = BTreeSet::new();
    Some(
        matches
            .into_iter()
            .filter(|book| seen.insert(book.name.as_str()))
            .map(|book| book.name.clone())
            .take(limit)
            .collect(),
    )
}

/// The book text suggestions start with: the alias the user typed, in catalog
/// casing, or the book's name
fn display_prefix(book: &Book, typed: &str) -> String {
    if book.name.eq_ignore_ascii_case(typed) {
        return book.name.clone();
    }
    book.aliases
        .iter()
        .find(|alias| alias.eq_ignore_ascii_case(typed))
        .unwrap_or(&book.name)
        .clone()
}

fn chapter_completions(
    parser: &ReferenceParser<'_>,
    book: &Book,
    prefix: &str,
    content: &str,
    config: &CompletionConfig,
) -> Vec<String> {
    if content.is_empty() {
        let shown = book.chapter_count.min(limit_u32(config.max_suggestions));
        return (1..=shown).map(|c| format!("{prefix} {c}")).collect();
    }

    let extended = extending_numbers(content, book.chapter_count, config.max_suggestions);
    if !extended.is_empty() {
        return extended.into_iter().map(|c| format!("{prefix} {c}")).collect();
    }

    match parse_number(content) {
        Some(chapter) if parser.canon().is_valid_chapter(book, chapter) => {
            vec![format!("{prefix} {chapter}:")]
        }
        _ => Vec::new(),
    }
}

fn verse_completions(
    parser: &ReferenceParser<'_>,
    book: &Book,
    prefix: &str,
    chapter_text: &str,
    verse_text: &str,
    config: &CompletionConfig,
) -> Vec<String> {
    let canon = parser.canon();
    let Some(chapter) = parse_number(chapter_text.trim()) else {
        return Vec::new();
    };
    let Some(verse_count) = canon.verse_count(book, chapter) else {
        return Vec::new();
    };

    let verse_text = verse_text.trim();
    if verse_text.is_empty() {
        let shown = verse_count.min(limit_u32(config.max_verse_listing));
        return (1..=shown)
            .map(|v| format!("{prefix} {chapter}:{v}"))
            .collect();
    }

    let Some(verse) = parse_number(verse_text) else {
        return Vec::new();
    };
    let extended = extending_numbers(verse_text, verse_count, config.max_suggestions);
    if !extended.is_empty() {
        return extended
            .into_iter()
            .map(|v| format!("{prefix} {chapter}:{v}"))
            .collect();
    }

    if canon.is_valid_verse(book, chapter, verse) {
        vec![
            format!("{prefix} {chapter}:{verse}-"),
            format!("{prefix} {chapter}:{verse},"),
        ]
    } else {
        Vec::new()
    }
}

/// Numbers in `1..=max` whose decimal form strictly extends `typed`
fn extending_numbers(typed: &str, max: u32, limit: usize) -> Vec<u32> {
    (1..=max)
        .filter(|n| {
            let digits = n.to_string();
            digits.len() > typed.len() && digits.starts_with(typed)
        })
        .take(limit)
        .collect()
}

fn limit_u32(limit: usize) -> u32 {
    u32::try_from(limit).unwrap_or(u32::MAX)
}
