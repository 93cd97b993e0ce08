use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dimensions::DimensionVector;

pub const QUIZ_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub question_id: u32,
    pub answer_index: u32,
}

impl QuizAnswer {
    pub fn new(question_id: u32, answer_index: u32) -> Self {
        Self {
            question_id,
            answer_index,
        }
    }
}

/// Answers handed to the calculator. Shape is not checked here; unknown
/// question ids and answer indices are skipped during scoring.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub answers: Vec<QuizAnswer>,
}

impl QuizSubmission {
    pub fn new(answers: Vec<QuizAnswer>) -> Self {
        Self { answers }
    }

    /// One answer per question id `1..=n`, in order.
    pub fn from_indices(indices: &[u32]) -> Self {
        Self {
            answers: indices
                .iter()
                .enumerate()
                .map(|(position, answer_index)| QuizAnswer::new(position as u32 + 1, *answer_index))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct QuizRequest {
    #[validate(length(equal = 8, message = "must answer all 8 questions"))]
    pub answers: Vec<QuizAnswer>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl QuizRequest {
    pub fn submission(&self) -> QuizSubmission {
        QuizSubmission::new(self.answers.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScan {
    pub dimensions: DimensionVector,
    pub node_count: u32,
    pub connection_count: u32,
}
