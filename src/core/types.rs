use serde::{Deserialize, Serialize};

/// Multiplier applied to the book number in a dense verse ordinal
pub const BOOK_FACTOR: u32 = 1_000_000;

/// Multiplier applied to the chapter number in a dense verse ordinal
pub const CHAPTER_FACTOR: u32 = 1_000;

/// Largest book number the dense ordinal can hold
pub const MAX_BOOK_NUMBER: u32 = 999;

/// Largest chapter count, or verse count per chapter, the dense ordinal can hold
pub const MAX_SEGMENT_COUNT: u32 = CHAPTER_FACTOR - 1;

/// Canonical division a book belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    /// Parse a testament label ("old", "ot", "new", "nt")
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "old" | "ot" => Some(Self::Old),
            "new" | "nt" => Some(Self::New),
            _ => None,
        }
    }
}

impl std::fmt::Display for Testament {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Old => write!(f, "old"),
            Self::New => write!(f, "new"),
        }
    }
}

/// How the book label of a reference is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceFormat {
    /// Three-character book code, e.g. `GEN 1:1-3`
    #[default]
    Canonical,
    /// Display name, e.g. `Genesis 1:1-3`
    FullName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testament_parse() {
        assert_eq!(Testament::parse("old"), Some(Testament::Old));
        assert_eq!(Testament::parse("NT"), Some(Testament::New));
        assert_eq!(Testament::parse("apocrypha"), None);
    }

    #[test]
    fn test_testament_serde() {
        let json = serde_json::to_string(&Testament::New).unwrap();
        assert_eq!(json, "\"new\"");
        let parsed: Testament = serde_json::from_str("\"old\"").unwrap();
        assert_eq!(parsed, Testament::Old);
    }
}
