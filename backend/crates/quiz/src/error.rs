//! Quiz Error Types
//!
//! This module provides quiz-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::ChoiceId;
use thiserror::Error;

/// Quiz-specific result type alias
pub type QuizResult<T> = Result<T, QuizError>;

/// A value or argument that breaks one of the aggregate's range rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Question title cannot be empty")]
    TitleEmpty,

    #[error("Question title is too long ({length} chars, maximum {max})")]
    TitleTooLong { length: usize, max: usize },

    #[error("Points must be between {min} and {max}, got {value}")]
    PointsOutOfRange { value: i64, min: u8, max: u8 },

    #[error("Max selections must be at least {min}, got {value}")]
    MaxSelectionsOutOfRange { value: i64, min: u32 },

    #[error("Choice text cannot be empty")]
    ChoiceTextEmpty,

    #[error("Choice text is too long ({length} chars, maximum {max})")]
    ChoiceTextTooLong { length: usize, max: usize },

    #[error("Too many choices selected ({selected}, maximum {max})")]
    TooManySelections { selected: usize, max: u32 },
}

/// Quiz-specific error variants
#[derive(Debug, Error)]
pub enum QuizError {
    /// Input violates a validation rule
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Referenced choice does not belong to the question
    #[error("Choice not found: {0}")]
    ChoiceNotFound(ChoiceId),
}

impl QuizError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuizError::Validation(ValidationError::TooManySelections { .. }) => {
                ErrorKind::BadRequest
            }
            QuizError::Validation(_) => ErrorKind::UnprocessableEntity,
            QuizError::ChoiceNotFound(_) => ErrorKind::NotFound,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, QuizError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, QuizError::ChoiceNotFound(_))
    }

    /// Hint for the caller on how to recover, if there is an obvious one
    fn action(&self) -> Option<String> {
        match self {
            QuizError::Validation(ValidationError::TooManySelections { max, .. }) => {
                Some(format!("Select at most {max} choice(s)"))
            }
            QuizError::Validation(ValidationError::TitleEmpty) => {
                Some("Enter a question title".to_string())
            }
            _ => None,
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            QuizError::ChoiceNotFound(choice_id) => {
                tracing::warn!(choice_id = %choice_id, "Quiz choice not found");
            }
            QuizError::Validation(e) => {
                tracing::debug!(error = %e, "Quiz validation error");
            }
        }
    }
}

impl From<QuizError> for AppError {
    fn from(err: QuizError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        let action = err.action();
        let app_err = AppError::new(kind, message);
        let app_err = match action {
            Some(action) => app_err.with_action(action),
            None => app_err,
        };
        app_err.with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            QuizError::from(ValidationError::TitleEmpty).kind(),
            ErrorKind::UnprocessableEntity
        );
        assert_eq!(
            QuizError::from(ValidationError::TooManySelections {
                selected: 3,
                max: 2
            })
            .kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(
            QuizError::ChoiceNotFound(ChoiceId::new()).kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_predicates() {
        assert!(QuizError::from(ValidationError::ChoiceTextEmpty).is_validation());
        assert!(QuizError::ChoiceNotFound(ChoiceId::new()).is_not_found());
    }

    #[test]
    fn test_into_app_error() {
        let app_err: AppError = QuizError::from(ValidationError::TooManySelections {
            selected: 3,
            max: 2,
        })
        .into();
        assert_eq!(app_err.status_code(), 400);
        assert_eq!(app_err.action(), Some("Select at most 2 choice(s)"));
        assert!(app_err.message().contains("Too many choices selected (3, maximum 2)"));
        assert!(app_err.source().is_some());

        let id = ChoiceId::new();
        let app_err: AppError = QuizError::ChoiceNotFound(id).into();
        assert_eq!(app_err.status_code(), 404);
        assert!(app_err.message().contains(&id.to_string()));
        assert!(app_err.action().is_none());
    }
}
