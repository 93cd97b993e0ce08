use std::sync::Arc;

use crate::{
    dimensions::{Axis, DimensionVector},
    scan::{
        metrics::{MetricJitter, MetricsConfig, brain_metrics},
        question_bank::QuestionBank,
        types::{DimensionScan, QuizAnswer, QuizSubmission},
    },
};

/// Reduces quiz answers to a normalized five-axis vector.
pub struct DimensionCalculator {
    bank: Arc<QuestionBank>,
    metrics: MetricsConfig,
    jitter: Arc<dyn MetricJitter>,
}

impl DimensionCalculator {
    pub fn new(
        bank: Arc<QuestionBank>,
        metrics: MetricsConfig,
        jitter: Arc<dyn MetricJitter>,
    ) -> Self {
        Self {
            bank,
            metrics,
            jitter,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn compute(&self, submission: &QuizSubmission) -> DimensionScan {
        let dimensions = self.dimensions(&submission.answers);
        let (node_count, connection_count) =
            brain_metrics(&dimensions, &self.metrics, self.jitter.as_ref());

        tracing::debug!(
            target: "scan",
            answers = submission.answers.len(),
            node_count,
            connection_count,
            "dimensions_computed"
        );

        DimensionScan {
            dimensions,
            node_count,
            connection_count,
        }
    }

    pub fn dimensions(&self, answers: &[QuizAnswer]) -> DimensionVector {
        let mut totals = [0i64; 5];

        for answer in answers {
            let Some(question) = self.bank.get(answer.question_id) else {
                tracing::debug!(
                    target: "scan",
                    question_id = answer.question_id,
                    "unknown_question_skipped"
                );
                continue;
            };
            let Some(weights) = question.weights_for(answer.answer_index) else {
                tracing::debug!(
                    target: "scan",
                    question_id = answer.question_id,
                    answer_index = answer.answer_index,
                    "unknown_answer_skipped"
                );
                continue;
            };

            for (axis, delta) in weights {
                totals[axis_slot(*axis)] += i64::from(*delta);
            }
        }

        normalize(totals)
    }
}

fn axis_slot(axis: Axis) -> usize {
    match axis {
        Axis::Topology => 0,
        Axis::Velocity => 1,
        Axis::Depth => 2,
        Axis::Entropy => 3,
        Axis::Evolution => 4,
    }
}

/// Maps `[-max_abs, max_abs]` onto `[0, 1]`; a zero total lands on 0.5.
fn normalize(totals: [i64; 5]) -> DimensionVector {
    let max_abs = totals
        .iter()
        .map(|total| total.unsigned_abs())
        .max()
        .filter(|max| *max > 0)
        .unwrap_or(1) as f64;

    DimensionVector::from_values(totals.map(|total| (total as f64 / max_abs + 1.0) / 2.0))
}
