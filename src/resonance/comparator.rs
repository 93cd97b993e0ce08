use crate::{
    dimensions::{Axis, DimensionVector, round_to},
    resonance::types::{BrainSignature, ResonanceLevel, ResonanceResult, ResonanceThresholds},
};

const SHARED_WEIGHT: f64 = 0.15;
const COMPLEMENTARY_WEIGHT: f64 = 0.20;
const SAME_ARCHETYPE_BONUS: f64 = 0.10;
const MIXED_ARCHETYPE_BONUS: f64 = 0.15;

pub trait ResonanceComparator: Send + Sync {
    fn compare(&self, first: BrainSignature<'_>, second: BrainSignature<'_>) -> ResonanceResult;
}

#[derive(Debug, Clone, Default)]
pub struct ThresholdResonanceComparator {
    thresholds: ResonanceThresholds,
}

impl ThresholdResonanceComparator {
    pub fn new(thresholds: ResonanceThresholds) -> Self {
        Self { thresholds }
    }
}

impl ResonanceComparator for ThresholdResonanceComparator {
    fn compare(&self, first: BrainSignature<'_>, second: BrainSignature<'_>) -> ResonanceResult {
        let overlap = overlap_score(first.dimensions, second.dimensions);
        let shared = shared_dimensions(first.dimensions, second.dimensions, self.thresholds.strong);
        let complementary = complementary_dimensions(
            first.dimensions,
            second.dimensions,
            self.thresholds.strong,
            self.thresholds.weak,
        );
        let level = resonance_level(overlap, shared.len());
        let potential = collaboration_potential(
            shared.len(),
            complementary.len(),
            first.archetype == second.archetype,
        );

        tracing::debug!(
            target: "resonance",
            brain_id_1 = first.brain_id,
            brain_id_2 = second.brain_id,
            level = ?level,
            overlap,
            shared = shared.len(),
            complementary = complementary.len(),
            "resonance_compared"
        );

        ResonanceResult {
            brain_id_1: first.brain_id.to_string(),
            brain_id_2: second.brain_id.to_string(),
            level,
            overlap_score: round_to(overlap, 3),
            shared_dimensions: shared,
            complementary_dimensions: complementary,
            collaboration_potential: potential,
        }
    }
}

fn paired_axes<'a>(
    first: &'a DimensionVector,
    second: &'a DimensionVector,
) -> impl Iterator<Item = (Axis, f64, f64)> + 'a {
    Axis::ALL
        .into_iter()
        .filter_map(|axis| Some((axis, first.get(axis)?, second.get(axis)?)))
}

/// Mean of `1 - |a - b|` over axes both vectors carry; 0.0 when none.
pub fn overlap_score(first: &DimensionVector, second: &DimensionVector) -> f64 {
    let (sum, count) = paired_axes(first, second)
        .fold((0.0, 0usize), |(sum, count), (_, a, b)| {
            (sum + (1.0 - (a - b).abs()), count + 1)
        });

    if count == 0 { 0.0 } else { sum / count as f64 }
}

pub fn shared_dimensions(first: &DimensionVector, second: &DimensionVector, strong: f64) -> Vec<Axis> {
    paired_axes(first, second)
        .filter(|(_, a, b)| *a > strong && *b > strong)
        .map(|(axis, _, _)| axis)
        .collect()
}

pub fn complementary_dimensions(
    first: &DimensionVector,
    second: &DimensionVector,
    strong: f64,
    weak: f64,
) -> Vec<Axis> {
    paired_axes(first, second)
        .filter(|(_, a, b)| (*a > strong && *b < weak) || (*b > strong && *a < weak))
        .map(|(axis, _, _)| axis)
        .collect()
}

/// Most exclusive tier first; `Aware` is the floor.
pub fn resonance_level(overlap: f64, shared_count: usize) -> ResonanceLevel {
    if overlap >= 0.90 && shared_count >= 4 {
        ResonanceLevel::Merged
    } else if overlap >= 0.75 && shared_count >= 3 {
        ResonanceLevel::Entangled
    } else if overlap >= 0.60 || shared_count >= 2 {
        ResonanceLevel::Resonant
    } else {
        ResonanceLevel::Aware
    }
}

/// Different archetypes earn the larger bonus.
pub fn collaboration_potential(
    shared_count: usize,
    complementary_count: usize,
    same_archetype: bool,
) -> f64 {
    let archetype_bonus = if same_archetype {
        SAME_ARCHETYPE_BONUS
    } else {
        MIXED_ARCHETYPE_BONUS
    };
    let raw = shared_count as f64 * SHARED_WEIGHT
        + complementary_count as f64 * COMPLEMENTARY_WEIGHT
        + archetype_bonus;
    round_to(raw.min(1.0), 2)
}
