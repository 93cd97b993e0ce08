pub mod comparator;
pub mod types;

pub use comparator::{ResonanceComparator, ThresholdResonanceComparator};
pub use types::{BrainSignature, ResonanceLevel, ResonanceResult, ResonanceThresholds};
