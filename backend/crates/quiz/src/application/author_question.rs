//! Author Question Use Case
//!
//! Builds a complete question, choices included, from a draft.

use std::sync::Arc;

use crate::application::config::QuizConfig;
use crate::domain::entity::question::Question;
use crate::domain::value_object::{
    max_selections::MaxSelections, points::Points, question_title::QuestionTitle,
};
use crate::error::QuizResult;

/// Choice input
#[derive(Debug, Clone)]
pub struct ChoiceDraft {
    pub text: String,
    pub is_correct: bool,
}

/// Question input
#[derive(Debug, Clone)]
pub struct QuestionDraft {
    pub title: String,
    pub points: Option<i64>,
    pub max_selections: Option<i64>,
    pub choices: Vec<ChoiceDraft>,
}

/// Author question use case
pub struct AuthorQuestionUseCase {
    config: Arc<QuizConfig>,
}

impl AuthorQuestionUseCase {
    pub fn new(config: Arc<QuizConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, draft: QuestionDraft) -> QuizResult<Question> {
        self.build(draft).inspect_err(|e| e.log())
    }

    fn build(&self, draft: QuestionDraft) -> QuizResult<Question> {
        let title = QuestionTitle::new(draft.title)?;
        let points = match draft.points {
            Some(points) => Points::new(points)?,
            None => self.config.default_points,
        };
        let max_selections = match draft.max_selections {
            Some(max) => MaxSelections::new(max)?,
            None => self.config.default_max_selections,
        };

        let mut question = Question::new(title, points, max_selections);
        for choice in draft.choices {
            question.add_choice(choice.text, choice.is_correct)?;
        }

        tracing::info!(
            question_id = %question.id(),
            choices = question.choices().len(),
            correct = question.correct_choice_ids().len(),
            "Question authored"
        );

        Ok(question)
    }
}
