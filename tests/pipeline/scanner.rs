use std::thread;

use mirrorbrain::{
    BrainScanner,
    archetype::Archetype,
    brain::{Brain, famous_brain},
    config::Config,
    dimensions::DimensionVector,
    resonance::ResonanceLevel,
    scan::{QuizSubmission, ScanErrorKind},
};

use super::{deterministic_scanner, request};

#[test]
fn submit_scores_first_option_quiz_as_builder() {
    let scanner = deterministic_scanner();
    let result = scanner.submit(&request(&[0; 8])).expect("quiz should score");

    assert_eq!(result.archetype, Archetype::Builder);
    assert_eq!(result.archetype_name, "The Builder");
    assert_eq!(result.archetype_emoji, "🟢");
    assert_eq!(result.strengths.len(), 4);
    assert_eq!(
        result.dimensions,
        DimensionVector::from_values([0.5, 1.0, 1.0, 0.4375, 0.625])
    );
    assert_eq!(result.node_count, 4500);
    assert_eq!(result.connection_count, 631);
    assert!(result.brain_id.starts_with("BRAIN-"));
    assert!(!result.created_at.is_empty());
}

#[test]
fn submit_rejects_incomplete_quiz() {
    let scanner = deterministic_scanner();
    let err = scanner
        .submit(&request(&[0; 7]))
        .expect_err("seven answers must be rejected");

    assert_eq!(err.kind, ScanErrorKind::InvalidRequest);
    assert!(
        err.message.contains("must answer all 8 questions"),
        "unexpected message: {}",
        err.message
    );
}

#[test]
fn submit_tolerates_unknown_indices_inside_a_full_quiz() {
    let scanner = deterministic_scanner();
    let result = scanner
        .submit(&request(&[7, 7, 7, 7, 7, 7, 7, 7]))
        .expect("shape is valid even when every index is unknown");

    assert_eq!(result.dimensions, DimensionVector::neutral());
    assert_eq!(result.archetype, Archetype::Architect);
}

#[test]
fn brain_record_carries_result_and_user() {
    let scanner = deterministic_scanner();
    let request = request(&[1, 2, 1, 2, 2, 2, 2, 1]);
    let result = scanner.submit(&request).expect("quiz should score");
    let brain = Brain::from_result(&result, request.user_id.clone());

    assert_eq!(brain.brain_id, result.brain_id);
    assert_eq!(brain.user_id.as_deref(), Some("user-1"));
    assert_eq!(brain.archetype, result.archetype);
    assert!(!brain.public);
    assert!(brain.twins.is_empty());

    let stats = brain.stats();
    assert_eq!(stats.node_count, result.node_count);
    assert!(stats.density > 0.0);
}

#[test]
fn connected_quiz_classifies_as_topology_archetype() {
    let scanner = deterministic_scanner();
    let result = scanner
        .submit(&request(&[1, 2, 1, 2, 2, 2, 2, 1]))
        .expect("quiz should score");

    assert_eq!(result.archetype, Archetype::Explorer);
}

#[test]
fn famous_brains_compare_as_entangled() {
    let scanner = deterministic_scanner();
    let einstein = famous_brain("einstein").expect("einstein").to_brain();
    let davinci = famous_brain("davinci").expect("davinci").to_brain();

    let result = scanner.compare(einstein.signature(), davinci.signature());
    assert_eq!(result.overlap_score, 0.876);
    assert_eq!(result.level, ResonanceLevel::Entangled);
    assert_eq!(result.shared_dimensions.len(), 3);
    assert_eq!(result.collaboration_potential, 0.6);
    assert_eq!(result.brain_id_1, "FAMOUS-einstein");
}

#[test]
fn scanner_is_shared_across_threads() {
    let scanner = BrainScanner::from_config(&Config::default());
    let submission = QuizSubmission::from_indices(&[3, 3, 3, 3, 3, 3, 3, 3]);
    let expected = scanner.compute_dimensions(&submission).dimensions;
    let (scanner, submission) = (&scanner, &submission);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || {
                    let dimensions = scanner.compute_dimensions(submission).dimensions;
                    (dimensions.clone(), scanner.classify_archetype(&dimensions))
                })
            })
            .collect();

        for handle in handles {
            let (dimensions, archetype) = handle.join().expect("worker should finish");
            assert_eq!(dimensions, expected);
            assert_eq!(archetype, scanner.classify_archetype(&expected));
        }
    });
}

#[test]
fn questions_expose_prompts_without_weights() {
    let questions = deterministic_scanner().questions();
    assert_eq!(questions.len(), 8);
    assert_eq!(questions[7].question, "Your ideal AI is:");
    assert_eq!(questions[7].options[3], "A creative spark");
}
