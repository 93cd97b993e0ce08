use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{archetype::Archetype, dimensions::Axis, dimensions::DimensionVector};

/// Ordered from loosest to tightest coupling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResonanceLevel {
    Aware,
    Resonant,
    Entangled,
    Merged,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResonanceResult {
    pub brain_id_1: String,
    pub brain_id_2: String,
    pub level: ResonanceLevel,
    pub overlap_score: f64,
    pub shared_dimensions: Vec<Axis>,
    pub complementary_dimensions: Vec<Axis>,
    pub collaboration_potential: f64,
}

/// One side of a comparison.
#[derive(Debug, Clone, Copy)]
pub struct BrainSignature<'a> {
    pub brain_id: &'a str,
    pub dimensions: &'a DimensionVector,
    pub archetype: Archetype,
}

impl<'a> BrainSignature<'a> {
    pub fn new(brain_id: &'a str, dimensions: &'a DimensionVector, archetype: Archetype) -> Self {
        Self {
            brain_id,
            dimensions,
            archetype,
        }
    }
}

fn default_strong_threshold() -> f64 {
    0.7
}

fn default_weak_threshold() -> f64 {
    0.4
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ResonanceThresholds {
    /// Strictly above this an axis counts as strong.
    #[serde(default = "default_strong_threshold")]
    #[schemars(range(min = 0.0, max = 1.0))]
    pub strong: f64,
    /// Strictly below this an axis counts as weak.
    #[serde(default = "default_weak_threshold")]
    #[schemars(range(min = 0.0, max = 1.0))]
    pub weak: f64,
}

impl Default for ResonanceThresholds {
    fn default() -> Self {
        Self {
            strong: default_strong_threshold(),
            weak: default_weak_threshold(),
        }
    }
}
