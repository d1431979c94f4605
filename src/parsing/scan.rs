use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::core::pericope::Pericope;
use crate::parsing::reference::ReferenceParser;
use crate::utils::validation::truncate_scan_input;

lazy_static! {
    // A three-letter code, or a digit and two letters (1CO), then a run of
    // chapter/verse punctuation: "GEN 1:1-3", "1co 13:4,7"
    static ref RE_REFERENCE: Regex =
        Regex::new(r"(?i)\b([A-Z]{3}|[1-3][A-Z]{2})\s+([0-9:,\-]+)").unwrap();
}

/// Extract every reference embedded in free text, in order of appearance.
///
/// Candidates that fail to parse are skipped. Trailing separators picked up from
/// the surrounding prose ("see GEN 1:1, and ...") are dropped before parsing.
/// The book token goes through the same fuzzy resolution as [`ReferenceParser::parse`],
/// so a short prose word followed by a number can match a book ("the 3" reads as HEB 3:1).
pub fn scan_references<'c>(parser: &ReferenceParser<'c>, text: &str) -> Vec<Pericope<'c>> {
    let text = truncate_scan_input(text);
    let mut found = Vec::new();

    for caps in RE_REFERENCE.captures_iter(text) {
        let book = &caps[1];
        let numbers = caps[2].trim_end_matches([',', '-', ':']);
        if numbers.is_empty() {
            continue;
        }
        let candidate = format!("{book} {numbers}");
        match parser.parse(&candidate) {
            Ok(pericope) => found.push(pericope),
            Err(e) => debug!(candidate = %candidate, error = %e, "Skipping reference candidate"),
        }
    }

    found
}
