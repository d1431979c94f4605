use crate::core::pericope::Pericope;
use crate::core::range::VerseRange;
use crate::core::types::ReferenceFormat;

/// Render a pericope as `<book> <ranges>`, e.g. `GEN 1:1-3,1:5`.
/// An empty pericope renders as an empty string.
pub fn format_pericope(pericope: &Pericope<'_>, format: ReferenceFormat) -> String {
    if pericope.is_empty() {
        return String::new();
    }
    let book = pericope.book();
    let prefix = match format {
        ReferenceFormat::Canonical => &book.code,
        ReferenceFormat::FullName => &book.name,
    };
    format!("{prefix} {}", format_ranges(pericope.ranges()))
}

/// Join ranges with commas, each in its `C:V`, `C:V-V'` or `C:V-C':V'` form
pub fn format_ranges(ranges: &[VerseRange]) -> String {
    ranges
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::canon::Canon;

    #[test]
    fn test_formats() {
        let canon = Canon::load_embedded().unwrap();
        let p = Pericope::parse(&canon, "1 Cor 13:4-7,13").unwrap();
        assert_eq!(format_pericope(&p, ReferenceFormat::Canonical), "1CO 13:4-7,13:13");
        assert_eq!(
            format_pericope(&p, ReferenceFormat::FullName),
            "1 Corinthians 13:4-7,13:13"
        );
    }

    #[test]
    fn test_empty_pericope() {
        let canon = Canon::load_embedded().unwrap();
        let gen = canon.book("GEN").unwrap();
        let empty = Pericope::empty(&canon, gen);
        assert_eq!(format_pericope(&empty, ReferenceFormat::FullName), "");
    }

    #[test]
    fn test_format_ranges() {
        let ranges = [
            VerseRange::single(1, 1),
            VerseRange::new(1, 3, 1, 5).unwrap(),
            VerseRange::new(1, 31, 2, 2).unwrap(),
        ];
        assert_eq!(format_ranges(&ranges), "1:1,1:3-5,1:31-2:2");
    }
}
