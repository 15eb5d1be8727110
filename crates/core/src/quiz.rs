//! Reading-comprehension quiz items produced by the generative model.
//!
//! The model is told that `answer` must equal one option verbatim, but
//! nothing guarantees it. [`parse_quiz`] checks every item and rejects the
//! whole response when one item cannot be graded.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::structured::extract_structured;

/// Fewest options a quiz item may carry.
pub const MIN_OPTIONS: usize = 3;

/// Most options a quiz item may carry.
pub const MAX_OPTIONS: usize = 4;

/// Number of questions requested per article.
pub const QUESTIONS_PER_QUIZ: usize = 3;

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    pub question: String,
    pub options: Vec<String>,
    /// Older prompts named this field `correctAnswer`.
    #[serde(alias = "correctAnswer")]
    pub answer: String,
}

/// Why a quiz item cannot be graded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("quiz contains no questions")]
    NoQuestions,

    #[error("question {index} has empty text")]
    EmptyQuestion { index: usize },

    #[error("question {index} has {count} options, expected 3-4")]
    OptionCount { index: usize, count: usize },

    #[error("question {index}: answer does not match any option")]
    AnswerNotInOptions { index: usize },

    #[error("question {index}: answer matches more than one option")]
    AmbiguousAnswer { index: usize },
}

impl From<QuizError> for CoreError {
    fn from(err: QuizError) -> Self {
        CoreError::MalformedAiResponse(err.to_string())
    }
}

impl QuizItem {
    /// Index of the correct option, if the answer matches exactly one.
    pub fn answer_index(&self) -> Option<usize> {
        let mut matches = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, option)| **option == self.answer);
        match (matches.next(), matches.next()) {
            (Some((idx, _)), None) => Some(idx),
            _ => None,
        }
    }
}

/// Check that every item is gradable. `index` in errors is zero-based.
pub fn validate_quiz(items: &[QuizItem]) -> Result<(), QuizError> {
    if items.is_empty() {
        return Err(QuizError::NoQuestions);
    }

    for (index, item) in items.iter().enumerate() {
        if item.question.trim().is_empty() {
            return Err(QuizError::EmptyQuestion { index });
        }

        let count = item.options.len();
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&count) {
            return Err(QuizError::OptionCount { index, count });
        }

        let hits = item.options.iter().filter(|o| **o == item.answer).count();
        match hits {
            0 => return Err(QuizError::AnswerNotInOptions { index }),
            1 => {}
            _ => return Err(QuizError::AmbiguousAnswer { index }),
        }
    }

    Ok(())
}

/// Parse raw model output into a validated quiz.
pub fn parse_quiz(raw: &str) -> Result<Vec<QuizItem>, CoreError> {
    let items: Vec<QuizItem> = extract_structured(raw)?;
    validate_quiz(&items)?;
    Ok(items)
}
