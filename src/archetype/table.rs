use serde::{Deserialize, Serialize};

use crate::{
    archetype::types::{Archetype, ArchetypeProfile},
    dimensions::Axis::{self, Depth, Entropy, Evolution, Topology, Velocity},
};

struct ProfileRow {
    archetype: Archetype,
    name: &'static str,
    emoji: &'static str,
    description: &'static str,
    strengths: [&'static str; 4],
    primary: Axis,
    secondary: Axis,
}

const STANDARD_PROFILES: [ProfileRow; 8] = [
    ProfileRow {
        archetype: Archetype::Architect,
        name: "The Architect",
        emoji: "🔷",
        description: "Systems thinker who builds frameworks. You see patterns where others see chaos and create structures that scale.",
        strengths: [
            "Systems design",
            "Pattern recognition",
            "Framework building",
            "Long-term planning",
        ],
        primary: Topology,
        secondary: Depth,
    },
    ProfileRow {
        archetype: Archetype::Explorer,
        name: "The Explorer",
        emoji: "🟣",
        description: "Curiosity-driven with wide connections. You thrive on discovery and make unexpected connections across domains.",
        strengths: [
            "Cross-domain thinking",
            "Curiosity",
            "Breadth of knowledge",
            "Novel connections",
        ],
        primary: Topology,
        secondary: Entropy,
    },
    ProfileRow {
        archetype: Archetype::Builder,
        name: "The Builder",
        emoji: "🟢",
        description: "Execution-focused, ships fast. You turn ideas into reality with speed and iteration.",
        strengths: [
            "Rapid execution",
            "Pragmatism",
            "Iteration",
            "Getting things done",
        ],
        primary: Velocity,
        secondary: Evolution,
    },
    ProfileRow {
        archetype: Archetype::Analyst,
        name: "The Analyst",
        emoji: "🟡",
        description: "Deep diver where precision matters. You go deep, understand nuances, and catch what others miss.",
        strengths: [
            "Deep analysis",
            "Precision",
            "Detail orientation",
            "Critical thinking",
        ],
        primary: Depth,
        secondary: Topology,
    },
    ProfileRow {
        archetype: Archetype::Connector,
        name: "The Connector",
        emoji: "🔵",
        description: "Bridges people and ideas. You see relationships and create synergies between disparate elements.",
        strengths: [
            "Relationship building",
            "Synthesis",
            "Communication",
            "Bridge building",
        ],
        primary: Topology,
        secondary: Velocity,
    },
    ProfileRow {
        archetype: Archetype::Creative,
        name: "The Creative",
        emoji: "🟠",
        description: "Makes unexpected links with artistic flair. You see possibilities and create novel combinations.",
        strengths: [
            "Creative thinking",
            "Innovation",
            "Artistic vision",
            "Unexpected connections",
        ],
        primary: Entropy,
        secondary: Evolution,
    },
    ProfileRow {
        archetype: Archetype::Scholar,
        name: "The Scholar",
        emoji: "⚪",
        description: "Knowledge accumulator, thorough and comprehensive. You build deep understanding over time.",
        strengths: [
            "Knowledge depth",
            "Thoroughness",
            "Research",
            "Comprehensive understanding",
        ],
        primary: Depth,
        secondary: Entropy,
    },
    ProfileRow {
        archetype: Archetype::Strategist,
        name: "The Strategist",
        emoji: "🔴",
        description: "Big picture, long-term thinker. You plan moves ahead and optimize for lasting impact.",
        strengths: [
            "Strategic planning",
            "Long-term vision",
            "Optimization",
            "Impact focus",
        ],
        primary: Evolution,
        secondary: Depth,
    },
];

/// Archetype profiles in classification order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeTable {
    profiles: Vec<ArchetypeProfile>,
}

impl ArchetypeTable {
    pub fn new(profiles: Vec<ArchetypeProfile>) -> Self {
        Self { profiles }
    }

    pub fn standard() -> Self {
        let profiles = STANDARD_PROFILES
            .iter()
            .map(|row| ArchetypeProfile {
                archetype: row.archetype,
                name: row.name.to_string(),
                emoji: row.emoji.to_string(),
                description: row.description.to_string(),
                strengths: row.strengths.iter().map(|s| s.to_string()).collect(),
                primary: row.primary,
                secondary: row.secondary,
            })
            .collect();
        Self::new(profiles)
    }

    pub fn profile(&self, archetype: Archetype) -> Option<&ArchetypeProfile> {
        self.profiles
            .iter()
            .find(|profile| profile.archetype == archetype)
    }

    pub fn profiles(&self) -> &[ArchetypeProfile] {
        &self.profiles
    }
}

impl Default for ArchetypeTable {
    fn default() -> Self {
        Self::standard()
    }
}
