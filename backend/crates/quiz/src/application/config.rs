//! Application Configuration
//!
//! Configuration for the quiz application layer.

use crate::domain::value_object::{max_selections::MaxSelections, points::Points};

/// Quiz application configuration
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// Points used when a draft does not specify any
    pub default_points: Points,
    /// Selection limit used when a draft does not specify one
    pub default_max_selections: MaxSelections,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_points: Points::DEFAULT,
            default_max_selections: MaxSelections::DEFAULT,
        }
    }
}
