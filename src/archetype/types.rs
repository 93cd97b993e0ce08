use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::dimensions::Axis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Architect,
    Explorer,
    Builder,
    Analyst,
    Connector,
    Creative,
    Scholar,
    Strategist,
}

impl Archetype {
    /// Classification order; earlier entries win exact score ties.
    pub const ALL: [Archetype; 8] = [
        Archetype::Architect,
        Archetype::Explorer,
        Archetype::Builder,
        Archetype::Analyst,
        Archetype::Connector,
        Archetype::Creative,
        Archetype::Scholar,
        Archetype::Strategist,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Architect => "architect",
            Self::Explorer => "explorer",
            Self::Builder => "builder",
            Self::Analyst => "analyst",
            Self::Connector => "connector",
            Self::Creative => "creative",
            Self::Scholar => "scholar",
            Self::Strategist => "strategist",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Archetype::ALL
            .into_iter()
            .find(|archetype| archetype.as_str() == value)
            .ok_or_else(|| format!("unknown archetype '{value}'"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeProfile {
    pub archetype: Archetype,
    pub name: String,
    pub emoji: String,
    pub description: String,
    pub strengths: Vec<String>,
    pub primary: Axis,
    pub secondary: Axis,
}
