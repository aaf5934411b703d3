//! Application Layer - Use cases
//!
//! Entry points for callers that work with plain input data rather than
//! validated domain types.

pub mod author_question;
pub mod config;
