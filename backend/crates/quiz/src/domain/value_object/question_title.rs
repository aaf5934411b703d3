//! Question Title Value Object
//!
//! The prompt shown to whoever answers the question.
//!
//! ## Invariants
//! - Not empty
//! - At most `QUESTION_TITLE_MAX_LENGTH` characters (Unicode scalar values)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Maximum length for a question title (in characters)
pub const QUESTION_TITLE_MAX_LENGTH: usize = 200;

/// Validated question title
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionTitle(String);

impl QuestionTitle {
    pub fn new(input: impl Into<String>) -> Result<Self, ValidationError> {
        let title = input.into();
        Self::validate(&title)?;
        Ok(Self(title))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(title: &str) -> Result<(), ValidationError> {
        if title.is_empty() {
            return Err(ValidationError::TitleEmpty);
        }

        let length = title.chars().count();
        if length > QUESTION_TITLE_MAX_LENGTH {
            return Err(ValidationError::TitleTooLong {
                length,
                max: QUESTION_TITLE_MAX_LENGTH,
            });
        }

        Ok(())
    }
}

impl fmt::Display for QuestionTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for QuestionTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for QuestionTitle {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuestionTitle> for String {
    fn from(title: QuestionTitle) -> Self {
        title.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_char() {
        assert_eq!(QuestionTitle::new("q").unwrap().as_str(), "q");
    }

    #[test]
    fn test_empty_fails() {
        assert_eq!(QuestionTitle::new(""), Err(ValidationError::TitleEmpty));
    }

    #[test]
    fn test_whitespace_only_accepted() {
        let title = QuestionTitle::new("   ").unwrap();
        assert_eq!(title.as_str(), "   ");
    }

    #[test]
    fn test_maximum_length() {
        let input = "a".repeat(QUESTION_TITLE_MAX_LENGTH);
        assert!(QuestionTitle::new(input).is_ok());
    }

    #[test]
    fn test_too_long() {
        assert_eq!(
            QuestionTitle::new("a".repeat(201)),
            Err(ValidationError::TitleTooLong {
                length: 201,
                max: 200
            })
        );
        assert!(QuestionTitle::new("a".repeat(500)).is_err());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 200 three-byte characters
        let input = "問".repeat(QUESTION_TITLE_MAX_LENGTH);
        assert!(QuestionTitle::new(input).is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        assert!(serde_json::from_str::<QuestionTitle>("\"\"").is_err());
        let title: QuestionTitle = serde_json::from_str("\"q1\"").unwrap();
        assert_eq!(title.as_str(), "q1");
    }
}
