use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwinType {
    Guardian,
    Scout,
    Synthesizer,
    Mirror,
}

impl TwinType {
    pub const ALL: [TwinType; 4] = [
        TwinType::Guardian,
        TwinType::Scout,
        TwinType::Synthesizer,
        TwinType::Mirror,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Guardian => "guardian",
            Self::Scout => "scout",
            Self::Synthesizer => "synthesizer",
            Self::Mirror => "mirror",
        }
    }
}

impl fmt::Display for TwinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TwinType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        TwinType::ALL
            .into_iter()
            .find(|twin| twin.as_str() == value)
            .ok_or_else(|| format!("invalid twin type: {value}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwinProfile {
    pub twin_type: TwinType,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    pub system_prompt: &'static str,
    pub reasoning: &'static str,
    pub suggestion: &'static str,
}

/// Everything a chat backend needs to answer as a twin, minus the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwinBriefing {
    pub twin_type: TwinType,
    pub brain_id: String,
    pub prompt: String,
    pub reasoning: String,
    pub suggestions: Vec<String>,
    pub resonance_hints: Vec<String>,
}
