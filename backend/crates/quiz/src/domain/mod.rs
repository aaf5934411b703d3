//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Question aggregate, Choice)
//! - Domain value objects (QuestionTitle, Points, MaxSelections, ChoiceText)

pub mod entity;
pub mod value_object;
