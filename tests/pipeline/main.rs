mod scanner;

use std::sync::Arc;

use mirrorbrain::{
    BrainScanner,
    archetype::{ArchetypeTable, WeightedAxisClassifier},
    resonance::ThresholdResonanceComparator,
    scan::{DimensionCalculator, MetricsConfig, NoJitter, QuestionBank, QuizAnswer, QuizRequest},
};

pub fn deterministic_scanner() -> BrainScanner {
    let archetypes = Arc::new(ArchetypeTable::standard());
    BrainScanner::new(
        DimensionCalculator::new(
            Arc::new(QuestionBank::standard()),
            MetricsConfig::default(),
            Arc::new(NoJitter),
        ),
        Box::new(WeightedAxisClassifier::new(Arc::clone(&archetypes))),
        Box::new(ThresholdResonanceComparator::default()),
        archetypes,
    )
}

pub fn request(indices: &[u32]) -> QuizRequest {
    QuizRequest {
        answers: indices
            .iter()
            .enumerate()
            .map(|(position, index)| QuizAnswer::new(position as u32 + 1, *index))
            .collect(),
        user_id: Some("user-1".to_string()),
    }
}
