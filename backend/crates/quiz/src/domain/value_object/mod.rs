//! Value Object Module

pub mod choice_text;
pub mod max_selections;
pub mod points;
pub mod question_title;

pub use kernel::id::{ChoiceId, QuestionId};
