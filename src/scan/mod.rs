pub mod calculator;
pub mod error;
pub mod metrics;
pub mod question_bank;
pub mod types;

pub use calculator::DimensionCalculator;
pub use error::{ScanError, ScanErrorKind};
pub use metrics::{MetricJitter, MetricsConfig, NoJitter, SeededJitter, ThreadRngJitter};
pub use question_bank::{AnswerOption, Question, QuestionBank, QuestionView};
pub use types::{DimensionScan, QuizAnswer, QuizRequest, QuizSubmission};
