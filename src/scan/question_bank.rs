use serde::{Deserialize, Serialize};

use crate::dimensions::Axis::{self, Depth, Entropy, Evolution, Topology, Velocity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub weights: Vec<(Axis, i32)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn weights_for(&self, answer_index: u32) -> Option<&[(Axis, i32)]> {
        self.options
            .get(answer_index as usize)
            .map(|option| option.weights.as_slice())
    }
}

/// Client-facing view of a question; weights stay private to scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

type OptionRow = (&'static str, &'static [(Axis, i32)]);

const STANDARD_QUESTIONS: [(u32, &str, [OptionRow; 4]); 8] = [
    (
        1,
        "When you learn something new, you...",
        [
            ("Dive deep into one thing", &[(Depth, 2), (Velocity, -1)]),
            ("Connect it to everything else", &[(Topology, 2), (Entropy, 1)]),
            ("Find the practical application", &[(Velocity, 2), (Depth, -1)]),
            ("Question the assumptions", &[(Entropy, 2), (Evolution, 1)]),
        ],
    ),
    (
        2,
        "Your browser tabs right now:",
        [
            ("5 or less (focused)", &[(Depth, 2), (Entropy, -1)]),
            ("10-20 (curious)", &[(Topology, 1), (Velocity, 1)]),
            ("20-50 (explorer)", &[(Topology, 2), (Entropy, 1)]),
            ("50+ (chaos genius)", &[(Entropy, 3), (Evolution, 1)]),
        ],
    ),
    (
        3,
        "When explaining ideas, you prefer:",
        [
            ("Bullet points", &[(Velocity, 2), (Depth, 1)]),
            ("Stories and analogies", &[(Topology, 2), (Entropy, 1)]),
            ("Diagrams and visuals", &[(Topology, 2), (Depth, 1)]),
            ("Just show me the code", &[(Velocity, 2), (Evolution, 1)]),
        ],
    ),
    (
        4,
        "Your notes are:",
        [
            ("Nonexistent", &[(Velocity, 2), (Depth, -1)]),
            ("Linear documents", &[(Depth, 2), (Entropy, -1)]),
            ("Connected web", &[(Topology, 3), (Evolution, 1)]),
            ("Organized chaos", &[(Entropy, 2), (Topology, 1)]),
        ],
    ),
    (
        5,
        "What drives you:",
        [
            ("Building things", &[(Velocity, 2), (Evolution, 1)]),
            ("Understanding things", &[(Depth, 2), (Topology, 1)]),
            ("Connecting things", &[(Topology, 2), (Entropy, 1)]),
            ("Improving things", &[(Evolution, 2), (Depth, 1)]),
        ],
    ),
    (
        6,
        "Your thinking speed:",
        [
            ("Slow and deep", &[(Depth, 3), (Velocity, -1)]),
            ("Fast and iterative", &[(Velocity, 2), (Evolution, 1)]),
            ("Bursts of insight", &[(Entropy, 2), (Topology, 1)]),
            ("Always running", &[(Velocity, 3), (Entropy, 1)]),
        ],
    ),
    (
        7,
        "When stuck, you:",
        [
            ("Push through", &[(Velocity, 2), (Depth, 1)]),
            ("Step away", &[(Entropy, 1), (Evolution, 1)]),
            ("Talk it out", &[(Topology, 2), (Entropy, 1)]),
            ("Research more", &[(Depth, 2), (Topology, 1)]),
        ],
    ),
    (
        8,
        "Your ideal AI is:",
        [
            ("A fast executor", &[(Velocity, 2), (Evolution, 1)]),
            ("A thinking partner", &[(Topology, 2), (Depth, 1)]),
            ("A knowledge base", &[(Depth, 2), (Entropy, -1)]),
            ("A creative spark", &[(Entropy, 2), (Evolution, 1)]),
        ],
    ),
];

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The eight-question BrainScan quiz.
    pub fn standard() -> Self {
        let questions = STANDARD_QUESTIONS
            .iter()
            .map(|(id, prompt, options)| Question {
                id: *id,
                prompt: prompt.to_string(),
                options: options
                    .iter()
                    .map(|(label, weights)| AnswerOption {
                        label: label.to_string(),
                        weights: weights.to_vec(),
                    })
                    .collect(),
            })
            .collect();
        Self::new(questions)
    }

    pub fn get(&self, question_id: u32) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.id == question_id)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn views(&self) -> Vec<QuestionView> {
        self.questions
            .iter()
            .map(|question| QuestionView {
                id: question.id,
                question: question.prompt.clone(),
                options: question
                    .options
                    .iter()
                    .map(|option| option.label.clone())
                    .collect(),
            })
            .collect()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}
