use thiserror::Error;

/// Errors raised while resolving or validating a reference.
///
/// Every variant is fatal to the call that produced it. Algebra operations never
/// return these; only construction and parsing do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("Invalid book: '{0}'")]
    InvalidBook(String),

    #[error("Invalid chapter {chapter} for book {book}")]
    InvalidChapter { book: String, chapter: u32 },

    #[error("Invalid verse {chapter}:{verse} for book {book}")]
    InvalidVerse {
        book: String,
        chapter: u32,
        verse: u32,
    },

    #[error("Failed to parse: '{text}' - {reason}")]
    ParseFailure { text: String, reason: String },
}

impl ReferenceError {
    pub(crate) fn parse_failure(text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ParseFailure {
            text: text.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ReferenceError::InvalidBook("Foo".to_string());
        assert_eq!(err.to_string(), "Invalid book: 'Foo'");

        let err = ReferenceError::InvalidVerse {
            book: "GEN".to_string(),
            chapter: 1,
            verse: 99,
        };
        assert_eq!(err.to_string(), "Invalid verse 1:99 for book GEN");

        let err = ReferenceError::parse_failure("", "empty reference");
        assert_eq!(err.to_string(), "Failed to parse: '' - empty reference");
    }
}
