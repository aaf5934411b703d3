//! Choice Text Value Object
//!
//! ## Invariants
//! - Not empty
//! - At most `CHOICE_TEXT_MAX_LENGTH` characters
//! - Any other content (punctuation, symbols) is kept verbatim

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Maximum length for a choice's text (in characters)
pub const CHOICE_TEXT_MAX_LENGTH: usize = 100;

/// Validated answer text of a choice
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChoiceText(String);

impl ChoiceText {
    pub fn new(input: impl Into<String>) -> Result<Self, ValidationError> {
        let text = input.into();
        if text.is_empty() {
            return Err(ValidationError::ChoiceTextEmpty);
        }

        let length = text.chars().count();
        if length > CHOICE_TEXT_MAX_LENGTH {
            return Err(ValidationError::ChoiceTextTooLong {
                length,
                max: CHOICE_TEXT_MAX_LENGTH,
            });
        }

        Ok(Self(text))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChoiceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ChoiceText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ChoiceText {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ChoiceText> for String {
    fn from(text: ChoiceText) -> Self {
        text.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_characters_kept() {
        assert_eq!(ChoiceText::new("@#!$").unwrap().as_str(), "@#!$");
    }

    #[test]
    fn test_empty_fails() {
        assert_eq!(ChoiceText::new(""), Err(ValidationError::ChoiceTextEmpty));
    }

    #[test]
    fn test_whitespace_only_accepted() {
        assert_eq!(ChoiceText::new(" ").unwrap().as_str(), " ");
        assert_eq!(ChoiceText::new(" \t").unwrap().as_str(), " \t");
    }

    #[test]
    fn test_length_bounds() {
        assert!(ChoiceText::new("a".repeat(CHOICE_TEXT_MAX_LENGTH)).is_ok());
        assert!(matches!(
            ChoiceText::new("a".repeat(CHOICE_TEXT_MAX_LENGTH + 1)),
            Err(ValidationError::ChoiceTextTooLong { length: 101, .. })
        ));
    }
}
