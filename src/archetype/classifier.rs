use std::sync::Arc;

use crate::{
    archetype::{table::ArchetypeTable, types::Archetype},
    dimensions::DimensionVector,
};

pub trait ArchetypeClassifier: Send + Sync {
    fn classify(&self, dimensions: &DimensionVector) -> Archetype;
}

/// Scores each profile as `2 * primary + secondary` and keeps the first
/// strictly greatest score in table order.
#[derive(Debug, Clone)]
pub struct WeightedAxisClassifier {
    table: Arc<ArchetypeTable>,
}

impl WeightedAxisClassifier {
    pub fn new(table: Arc<ArchetypeTable>) -> Self {
        Self { table }
    }
}

impl Default for WeightedAxisClassifier {
    fn default() -> Self {
        Self::new(Arc::new(ArchetypeTable::standard()))
    }
}

impl ArchetypeClassifier for WeightedAxisClassifier {
    fn classify(&self, dimensions: &DimensionVector) -> Archetype {
        let mut best: Option<Archetype> = None;
        let mut best_score = f64::NEG_INFINITY;

        for profile in self.table.profiles() {
            let primary = dimensions.get(profile.primary).unwrap_or(0.0);
            let secondary = dimensions.get(profile.secondary).unwrap_or(0.0);
            let score = primary * 2.0 + secondary;
            if score > best_score {
                best_score = score;
                best = Some(profile.archetype);
            }
        }

        best.unwrap_or(Archetype::Explorer)
    }
}
