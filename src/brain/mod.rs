pub mod famous;
pub mod load;
pub mod types;

pub use famous::{FamousBrain, famous_brain, famous_brains, famous_keys};
pub use load::{ScanReport, load_brain};
pub use types::{Brain, BrainStats, QuizResult, new_brain_id, now_timestamp};
