pub mod classifier;
pub mod table;
pub mod types;

pub use classifier::{ArchetypeClassifier, WeightedAxisClassifier};
pub use table::ArchetypeTable;
pub use types::{Archetype, ArchetypeProfile};
