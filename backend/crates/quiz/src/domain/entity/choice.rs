//! Choice Entity
//!
//! An answer option. Choices only exist inside a [`Question`] and are
//! created and removed through it.
//!
//! [`Question`]: super::question::Question

use serde::Serialize;

use crate::domain::value_object::{ChoiceId, choice_text::ChoiceText};

/// Answer option owned by a question
#[derive(Debug, Serialize)]
pub struct Choice {
    id: ChoiceId,
    text: ChoiceText,
    is_correct: bool,
}

impl Choice {
    pub(crate) fn new(text: ChoiceText, is_correct: bool) -> Self {
        Self {
            id: ChoiceId::new(),
            text,
            is_correct,
        }
    }

    #[inline]
    pub fn id(&self) -> ChoiceId {
        self.id
    }

    #[inline]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    #[inline]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub(crate) fn set_correct(&mut self, is_correct: bool) {
        self.is_correct = is_correct;
    }
}
