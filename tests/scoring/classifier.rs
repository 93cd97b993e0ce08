use mirrorbrain::{
    archetype::{Archetype, ArchetypeClassifier, WeightedAxisClassifier},
    dimensions::{Axis, DimensionVector},
};

use super::{uniform, with_axes};

#[test]
fn hand_derived_vector_classifies_as_builder() {
    let classifier = WeightedAxisClassifier::default();
    let vector = DimensionVector::from_values([0.5, 1.0, 1.0, 0.4375, 0.625]);
    // builder 2.625 beats analyst 2.5 and scholar 2.4375
    assert_eq!(classifier.classify(&vector), Archetype::Builder);
}

#[test]
fn exact_ties_go_to_the_first_archetype_in_order() {
    let classifier = WeightedAxisClassifier::default();
    assert_eq!(classifier.classify(&uniform(0.5)), Archetype::Architect);

    // architect and explorer both score 2.6; connector too
    let vector = with_axes(0.6, &[(Axis::Topology, 1.0)]);
    assert_eq!(classifier.classify(&vector), Archetype::Architect);
}

#[test]
fn classification_is_deterministic() {
    let classifier = WeightedAxisClassifier::default();
    let vector = DimensionVector::from_values([0.31, 0.72, 0.18, 0.66, 0.93]);
    let first = classifier.classify(&vector);
    for _ in 0..50 {
        assert_eq!(classifier.classify(&vector), first);
    }
    assert_eq!(first, Archetype::Builder);
}

#[test]
fn each_primary_axis_can_win() {
    let classifier = WeightedAxisClassifier::default();
    let cases = [
        (with_axes(0.1, &[(Axis::Topology, 0.9), (Axis::Depth, 0.6)]), Archetype::Architect),
        (with_axes(0.1, &[(Axis::Topology, 0.9), (Axis::Entropy, 0.6)]), Archetype::Explorer),
        (with_axes(0.1, &[(Axis::Velocity, 0.9), (Axis::Evolution, 0.6)]), Archetype::Builder),
        (with_axes(0.1, &[(Axis::Depth, 0.9), (Axis::Topology, 0.6)]), Archetype::Analyst),
        (with_axes(0.1, &[(Axis::Topology, 0.9), (Axis::Velocity, 0.6)]), Archetype::Connector),
        (with_axes(0.1, &[(Axis::Entropy, 0.9), (Axis::Evolution, 0.6)]), Archetype::Creative),
        (with_axes(0.1, &[(Axis::Depth, 0.9), (Axis::Entropy, 0.6)]), Archetype::Scholar),
        (with_axes(0.1, &[(Axis::Evolution, 0.9), (Axis::Depth, 0.6)]), Archetype::Strategist),
    ];

    for (vector, expected) in cases {
        assert_eq!(classifier.classify(&vector), expected, "vector {vector:?}");
    }
}
