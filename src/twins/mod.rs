pub mod briefing;
pub mod profiles;
pub mod types;

pub use briefing::{brain_context, brief, resonance_hints};
pub use profiles::{twin_profile, twin_profiles};
pub use types::{TwinBriefing, TwinProfile, TwinType};
