//! Question Entity
//!
//! Aggregate root of the quiz domain. A question owns an ordered list of
//! [`Choice`]s; every change to a choice goes through the question.
//!
//! ## Invariants
//! - `title`, `points` and `max_selections` are valid value objects
//! - Choice ids are unique within `choices` (each id is a fresh UUID v4)
//! - Insertion order of `choices` is preserved across removals

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::entity::choice::Choice;
use crate::domain::value_object::{
    ChoiceId, QuestionId, choice_text::ChoiceText, max_selections::MaxSelections,
    points::Points, question_title::QuestionTitle,
};
use crate::error::{QuizError, QuizResult, ValidationError};

/// Quiz question with its answer choices
#[derive(Debug, Serialize)]
pub struct Question {
    id: QuestionId,
    title: QuestionTitle,
    points: Points,
    max_selections: MaxSelections,
    choices: Vec<Choice>,
}

impl Question {
    /// Create a question from already validated parts
    pub fn new(title: QuestionTitle, points: Points, max_selections: MaxSelections) -> Self {
        let question = Self {
            id: QuestionId::new(),
            title,
            points,
            max_selections,
            choices: Vec::new(),
        };

        tracing::debug!(
            question_id = %question.id,
            points = question.points.value(),
            max_selections = question.max_selections.value(),
            "Question created"
        );

        question
    }

    /// Validate raw input and create a question
    ///
    /// Fails with [`QuizError::Validation`] when the title is empty or longer
    /// than 200 characters, when `points` is outside `1..=100`, or when
    /// `max_selections` is below 1.
    pub fn try_new(
        title: impl Into<String>,
        points: i64,
        max_selections: i64,
    ) -> QuizResult<Self> {
        let title = QuestionTitle::new(title)?;
        let points = Points::new(points)?;
        let max_selections = MaxSelections::new(max_selections)?;
        Ok(Self::new(title, points, max_selections))
    }

    /// Create a question worth one point that allows a single selection
    pub fn with_title(title: impl Into<String>) -> QuizResult<Self> {
        let title = QuestionTitle::new(title)?;
        Ok(Self::new(title, Points::default(), MaxSelections::default()))
    }

    #[inline]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[inline]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    #[inline]
    pub fn points(&self) -> u8 {
        self.points.value()
    }

    #[inline]
    pub fn max_selections(&self) -> u32 {
        self.max_selections.value()
    }

    /// Choices in insertion order
    #[inline]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn choice(&self, choice_id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id() == choice_id)
    }

    /// Append a new choice and return it
    pub fn add_choice(&mut self, text: impl Into<String>, is_correct: bool) -> QuizResult<&Choice> {
        let text = ChoiceText::new(text)?;
        let choice = Choice::new(text, is_correct);

        tracing::debug!(
            question_id = %self.id,
            choice_id = %choice.id(),
            is_correct,
            "Choice added"
        );

        let index = self.choices.len();
        self.choices.push(choice);
        Ok(&self.choices[index])
    }

    /// Remove a single choice, keeping the order of the others
    pub fn remove_choice_by_id(&mut self, choice_id: ChoiceId) -> QuizResult<()> {
        let index = self
            .choices
            .iter()
            .position(|c| c.id() == choice_id)
            .ok_or(QuizError::ChoiceNotFound(choice_id))?;

        self.choices.remove(index);

        tracing::debug!(
            question_id = %self.id,
            choice_id = %choice_id,
            remaining = self.choices.len(),
            "Choice removed"
        );

        Ok(())
    }

    /// Validate a selection against this question
    ///
    /// Every id must name one of this question's choices, and the number of
    /// ids provided must not exceed `max_selections`. Ids are checked before
    /// the limit. Duplicates collapse only in the returned set. Nothing is
    /// mutated.
    pub fn select_choices(&self, choice_ids: &[ChoiceId]) -> QuizResult<HashSet<ChoiceId>> {
        let selected = self.resolve_all(choice_ids)?;

        if !self.max_selections.allows(choice_ids.len()) {
            return Err(ValidationError::TooManySelections {
                selected: choice_ids.len(),
                max: self.max_selections.value(),
            }
            .into());
        }

        Ok(selected)
    }

    /// Define the exact set of correct choices
    ///
    /// The listed choices become correct and every other choice becomes
    /// incorrect. Unknown ids fail the call before anything changes.
    /// Independent of `max_selections`.
    pub fn set_correct_choices(&mut self, choice_ids: &[ChoiceId]) -> QuizResult<()> {
        let correct = self.resolve_all(choice_ids)?;

        for choice in &mut self.choices {
            choice.set_correct(correct.contains(&choice.id()));
        }

        tracing::debug!(
            question_id = %self.id,
            correct = correct.len(),
            total = self.choices.len(),
            "Correct choices set"
        );

        Ok(())
    }

    pub fn correct_choice_ids(&self) -> HashSet<ChoiceId> {
        self.choices
            .iter()
            .filter(|c| c.is_correct())
            .map(Choice::id)
            .collect()
    }

    /// Points earned by a selection: full points only when it matches the
    /// correct set exactly, otherwise zero.
    pub fn score(&self, choice_ids: &[ChoiceId]) -> QuizResult<u8> {
        let selected = self.select_choices(choice_ids)?;
        if selected == self.correct_choice_ids() {
            Ok(self.points.value())
        } else {
            Ok(0)
        }
    }

    fn resolve_all(&self, choice_ids: &[ChoiceId]) -> QuizResult<HashSet<ChoiceId>> {
        choice_ids
            .iter()
            .map(|&id| match self.choice(id) {
                Some(_) => Ok(id),
                None => Err(QuizError::ChoiceNotFound(id)),
            })
            .collect()
    }
}
