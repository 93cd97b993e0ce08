use mirrorbrain::{
    archetype::Archetype,
    dimensions::{Axis, DimensionVector},
    resonance::{
        BrainSignature, ResonanceComparator, ResonanceLevel, ResonanceThresholds,
        ThresholdResonanceComparator, comparator::resonance_level,
    },
};

use super::{uniform, with_axes};

fn compare(
    first: &DimensionVector,
    first_archetype: Archetype,
    second: &DimensionVector,
    second_archetype: Archetype,
) -> mirrorbrain::resonance::ResonanceResult {
    ThresholdResonanceComparator::default().compare(
        BrainSignature::new("BRAIN-first", first, first_archetype),
        BrainSignature::new("BRAIN-second", second, second_archetype),
    )
}

#[test]
fn identical_strong_brains_merge() {
    let vector = uniform(0.9);
    let result = compare(&vector, Archetype::Builder, &vector, Archetype::Builder);

    assert_eq!(result.overlap_score, 1.0);
    assert_eq!(result.level, ResonanceLevel::Merged);
    assert_eq!(result.shared_dimensions, Axis::ALL.to_vec());
    assert!(result.complementary_dimensions.is_empty());
    assert_eq!(result.collaboration_potential, 0.85);
    assert_eq!(result.brain_id_1, "BRAIN-first");
    assert_eq!(result.brain_id_2, "BRAIN-second");
}

#[test]
fn opposite_axes_are_complementary_not_shared() {
    let first = with_axes(0.5, &[(Axis::Topology, 0.9), (Axis::Velocity, 0.1)]);
    let second = with_axes(0.5, &[(Axis::Topology, 0.1), (Axis::Velocity, 0.9)]);
    let result = compare(&first, Archetype::Explorer, &second, Archetype::Builder);

    assert_eq!(
        result.complementary_dimensions,
        vec![Axis::Topology, Axis::Velocity]
    );
    assert!(result.shared_dimensions.is_empty());
    // (0.2 + 0.2 + 1 + 1 + 1) / 5
    assert_eq!(result.overlap_score, 0.68);
    assert_eq!(result.level, ResonanceLevel::Resonant);
    assert_eq!(result.collaboration_potential, 0.55);
}

#[test]
fn overlap_is_symmetric() {
    let first = DimensionVector::from_values([0.12, 0.87, 0.45, 0.66, 0.03]);
    let second = DimensionVector::from_values([0.91, 0.22, 0.5, 0.71, 0.38]);

    let forward = compare(&first, Archetype::Analyst, &second, Archetype::Creative);
    let backward = compare(&second, Archetype::Creative, &first, Archetype::Analyst);

    assert_eq!(forward.overlap_score, backward.overlap_score);
    assert_eq!(forward.level, backward.level);
    assert_eq!(forward.shared_dimensions, backward.shared_dimensions);
    assert_eq!(
        forward.complementary_dimensions,
        backward.complementary_dimensions
    );
    assert_eq!(
        forward.collaboration_potential,
        backward.collaboration_potential
    );
}

#[test]
fn neutral_self_comparison_is_resonant_without_shared_strengths() {
    let vector = DimensionVector::neutral();
    let result = compare(&vector, Archetype::Architect, &vector, Archetype::Architect);

    assert_eq!(result.overlap_score, 1.0);
    assert!(result.shared_dimensions.is_empty());
    assert_eq!(result.level, ResonanceLevel::Resonant);
    assert_eq!(result.collaboration_potential, 0.1);
}

#[test]
fn distant_weak_brains_are_only_aware() {
    let first = uniform(0.0);
    let second = uniform(0.5);
    let result = compare(&first, Archetype::Scholar, &second, Archetype::Analyst);

    assert_eq!(result.overlap_score, 0.5);
    assert_eq!(result.level, ResonanceLevel::Aware);
    assert_eq!(result.collaboration_potential, 0.15);
}

#[test]
fn partial_vectors_compare_on_common_axes_only() {
    let first = DimensionVector::from_pairs([(Axis::Depth, 0.8), (Axis::Entropy, 0.2)]);
    let second = uniform(0.8);
    let result = compare(&first, Archetype::Scholar, &second, Archetype::Scholar);

    assert_eq!(result.overlap_score, 0.7);
    assert_eq!(result.shared_dimensions, vec![Axis::Depth]);
    assert_eq!(result.complementary_dimensions, vec![Axis::Entropy]);
}

#[test]
fn empty_vector_has_zero_overlap() {
    let result = compare(
        &DimensionVector::default(),
        Archetype::Explorer,
        &uniform(0.9),
        Archetype::Explorer,
    );
    assert_eq!(result.overlap_score, 0.0);
    assert_eq!(result.level, ResonanceLevel::Aware);
}

#[test]
fn higher_overlap_never_lowers_the_tier() {
    for shared in 0..=5 {
        let mut previous = ResonanceLevel::Aware;
        for step in 0..=100 {
            let overlap = f64::from(step) / 100.0;
            let level = resonance_level(overlap, shared);
            assert!(
                level >= previous,
                "tier dropped at overlap {overlap} with {shared} shared"
            );
            previous = level;
        }
    }
}

#[test]
fn collaboration_potential_is_bounded_and_two_place() {
    let values = [0.0, 0.05, 0.35, 0.39, 0.41, 0.7, 0.71, 0.95, 1.0];
    for a in values {
        for b in values {
            let first = with_axes(a, &[(Axis::Velocity, b)]);
            let second = with_axes(b, &[(Axis::Depth, a)]);
            for same in [Archetype::Builder, Archetype::Connector] {
                let potential = compare(&first, Archetype::Builder, &second, same)
                    .collaboration_potential;
                assert!((0.0..=1.0).contains(&potential), "potential {potential}");
                assert_eq!(potential, (potential * 100.0).round() / 100.0);
            }
        }
    }
}

#[test]
fn custom_thresholds_change_strength_bands() {
    let comparator = ThresholdResonanceComparator::new(ResonanceThresholds {
        strong: 0.85,
        weak: 0.2,
    });
    let vector = uniform(0.8);
    let result = comparator.compare(
        BrainSignature::new("a", &vector, Archetype::Builder),
        BrainSignature::new("b", &vector, Archetype::Builder),
    );
    assert!(result.shared_dimensions.is_empty());
    assert_eq!(result.level, ResonanceLevel::Resonant);
}

#[test]
fn overlap_ties_round_to_even() {
    // sims 0.825 + 0.7 + 0.925 + 0.6875 + 0.925 = 4.0625, mean 0.8125
    let first = DimensionVector::from_values([0.875, 1.0, 0.625, 0.6875, 0.625]);
    let second = DimensionVector::from_values([0.7, 0.7, 0.55, 1.0, 0.7]);
    let result = compare(&first, Archetype::Builder, &second, Archetype::Creative);

    assert_eq!(result.overlap_score, 0.812);
    assert_eq!(result.level, ResonanceLevel::Resonant);
}
