//! Quiz Question Module
//!
//! Clean Architecture structure:
//! - `domain/` - Question aggregate, Choice entity, value objects
//! - `application/` - Use cases and configuration
//!
//! ## Model
//! - A `Question` owns its `Choice`s; choices are only created and removed
//!   through the question
//! - Identifiers are UUID v4, unique across every question and choice
//! - Selections are validated against the question's `max_selections`
//! - `set_correct_choices` defines the exact correct set

pub mod application;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use application::author_question::{AuthorQuestionUseCase, ChoiceDraft, QuestionDraft};
pub use application::config::QuizConfig;
pub use domain::entity::{choice::Choice, question::Question};
pub use domain::value_object::{ChoiceId, QuestionId};
pub use error::{QuizError, QuizResult, ValidationError};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}
