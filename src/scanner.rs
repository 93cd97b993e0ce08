use std::sync::Arc;

use validator::Validate;

use crate::{
    archetype::{Archetype, ArchetypeClassifier, ArchetypeProfile, ArchetypeTable, WeightedAxisClassifier},
    brain::QuizResult,
    config::Config,
    dimensions::DimensionVector,
    resonance::{BrainSignature, ResonanceComparator, ResonanceResult, ThresholdResonanceComparator},
    scan::{
        DimensionCalculator, DimensionScan, QuestionBank, QuestionView,
        QuizRequest, QuizSubmission, ScanError,
        error::{internal_error, invalid_request},
    },
};

/// Quiz scoring pipeline: dimensions, then archetype, then resonance.
///
/// Built once at startup and shared by reference; every operation is a pure
/// function of its inputs and the immutable tables held here.
pub struct BrainScanner {
    calculator: DimensionCalculator,
    classifier: Box<dyn ArchetypeClassifier>,
    comparator: Box<dyn ResonanceComparator>,
    archetypes: Arc<ArchetypeTable>,
}

impl BrainScanner {
    pub fn new(
        calculator: DimensionCalculator,
        classifier: Box<dyn ArchetypeClassifier>,
        comparator: Box<dyn ResonanceComparator>,
        archetypes: Arc<ArchetypeTable>,
    ) -> Self {
        Self {
            calculator,
            classifier,
            comparator,
            archetypes,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let bank = Arc::new(QuestionBank::standard());
        let archetypes = Arc::new(ArchetypeTable::standard());

        Self::new(
            DimensionCalculator::new(bank, config.metrics.clone(), config.metrics.jitter()),
            Box::new(WeightedAxisClassifier::new(Arc::clone(&archetypes))),
            Box::new(ThresholdResonanceComparator::new(config.resonance.clone())),
            archetypes,
        )
    }

    pub fn with_defaults() -> Self {
        Self::from_config(&Config::default())
    }

    pub fn questions(&self) -> Vec<QuestionView> {
        self.calculator.bank().views()
    }

    pub fn archetypes(&self) -> &ArchetypeTable {
        &self.archetypes
    }

    pub fn archetype_profile(&self, archetype: Archetype) -> Option<&ArchetypeProfile> {
        self.archetypes.profile(archetype)
    }

    pub fn compute_dimensions(&self, submission: &QuizSubmission) -> DimensionScan {
        self.calculator.compute(submission)
    }

    pub fn classify_archetype(&self, dimensions: &DimensionVector) -> Archetype {
        self.classifier.classify(dimensions)
    }

    pub fn compare(&self, first: BrainSignature<'_>, second: BrainSignature<'_>) -> ResonanceResult {
        self.comparator.compare(first, second)
    }

    /// Validates request shape, then scores it into a fresh quiz result.
    pub fn submit(&self, request: &QuizRequest) -> Result<QuizResult, ScanError> {
        request
            .validate()
            .map_err(|errors| invalid_request(errors.to_string()))?;

        let scan = self.compute_dimensions(&request.submission());
        let archetype = self.classify_archetype(&scan.dimensions);
        let profile = self.archetype_profile(archetype).ok_or_else(|| {
            internal_error(format!("archetype '{archetype}' missing from profile table"))
        })?;

        let result = QuizResult::new(scan, profile);
        tracing::info!(
            target: "scanner",
            brain_id = %result.brain_id,
            archetype = %result.archetype,
            node_count = result.node_count,
            connection_count = result.connection_count,
            "quiz_scored"
        );
        Ok(result)
    }
}

impl Default for BrainScanner {
    fn default() -> Self {
        Self::with_defaults()
    }
}
