use std::sync::Arc;

use mirrorbrain::{
    dimensions::{Axis, DimensionVector},
    scan::{DimensionCalculator, MetricsConfig, NoJitter, QuestionBank, QuizAnswer, QuizSubmission, SeededJitter},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn calculator() -> DimensionCalculator {
    DimensionCalculator::new(
        Arc::new(QuestionBank::standard()),
        MetricsConfig::default(),
        Arc::new(NoJitter),
    )
}

#[test]
fn empty_submission_is_neutral() {
    let scan = calculator().compute(&QuizSubmission::default());
    assert_eq!(scan.dimensions, DimensionVector::neutral());
}

#[test]
fn all_first_options_produce_hand_derived_vector() {
    let scan = calculator().compute(&QuizSubmission::from_indices(&[0; 8]));

    // totals: topology 0, velocity 8, depth 8, entropy -1, evolution 2
    assert_eq!(
        scan.dimensions,
        DimensionVector::from_values([0.5, 1.0, 1.0, 0.4375, 0.625])
    );
    assert_eq!(scan.node_count, 1000 + 1500 + 2000);
    assert_eq!(scan.connection_count, 631);
}

#[test]
fn unknown_questions_and_answers_are_skipped() {
    let calculator = calculator();
    let baseline = calculator.dimensions(&[QuizAnswer::new(1, 0)]);
    let noisy = calculator.dimensions(&[
        QuizAnswer::new(1, 0),
        QuizAnswer::new(0, 1),
        QuizAnswer::new(9, 2),
        QuizAnswer::new(3, 4),
    ]);

    assert_eq!(noisy, baseline);
    assert_eq!(baseline.get(Axis::Depth), Some(1.0));
    assert_eq!(baseline.get(Axis::Velocity), Some(0.25));
    assert_eq!(baseline.get(Axis::Topology), Some(0.5));
}

#[test]
fn every_submission_stays_normalized_and_complete() {
    let calculator = DimensionCalculator::new(
        Arc::new(QuestionBank::standard()),
        MetricsConfig::default(),
        Arc::new(SeededJitter::new(11)),
    );
    let mut rng = StdRng::seed_from_u64(2026);

    for _ in 0..500 {
        let length = rng.gen_range(0..=10);
        let answers: Vec<QuizAnswer> = (0..length)
            .map(|_| QuizAnswer::new(rng.gen_range(0..=9), rng.gen_range(0..=5)))
            .collect();
        let scan = calculator.compute(&QuizSubmission::new(answers.clone()));

        assert!(scan.dimensions.is_complete(), "partial vector for {answers:?}");
        for (axis, value) in scan.dimensions.iter() {
            assert!(
                (0.0..=1.0).contains(&value),
                "{axis} = {value} out of range for {answers:?}"
            );
        }
        assert!(scan.node_count >= 500);
        assert!(scan.connection_count >= 100);
    }
}

#[test]
fn metrics_jitter_stays_within_documented_bounds() {
    let calculator = DimensionCalculator::new(
        Arc::new(QuestionBank::standard()),
        MetricsConfig::default(),
        Arc::new(SeededJitter::new(3)),
    );
    let submission = QuizSubmission::from_indices(&[0; 8]);

    for _ in 0..200 {
        let scan = calculator.compute(&submission);
        assert!((4300..=4700).contains(&scan.node_count), "nodes {}", scan.node_count);
        assert!(
            (581..=681).contains(&scan.connection_count),
            "connections {}",
            scan.connection_count
        );
    }
}
