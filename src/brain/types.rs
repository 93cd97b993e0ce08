use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use uuid::Uuid;

use crate::{
    archetype::{Archetype, ArchetypeProfile},
    dimensions::{DimensionVector, round_to},
    resonance::BrainSignature,
    scan::DimensionScan,
    twins::TwinType,
};

pub fn new_brain_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("BRAIN-{}", &hex[..8])
}

/// RFC 3339 in local time when the offset is known, UTC otherwise.
pub fn now_timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(&Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub brain_id: String,
    pub archetype: Archetype,
    pub archetype_name: String,
    pub archetype_emoji: String,
    pub description: String,
    pub strengths: Vec<String>,
    pub dimensions: DimensionVector,
    pub node_count: u32,
    pub connection_count: u32,
    pub created_at: String,
}

impl QuizResult {
    pub fn new(scan: DimensionScan, profile: &ArchetypeProfile) -> Self {
        Self {
            brain_id: new_brain_id(),
            archetype: profile.archetype,
            archetype_name: profile.name.clone(),
            archetype_emoji: profile.emoji.clone(),
            description: profile.description.clone(),
            strengths: profile.strengths.clone(),
            dimensions: scan.dimensions,
            node_count: scan.node_count,
            connection_count: scan.connection_count,
            created_at: now_timestamp(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brain {
    pub brain_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub archetype: Archetype,
    pub dimensions: DimensionVector,
    pub node_count: u32,
    pub connection_count: u32,
    #[serde(default)]
    pub twins: Vec<TwinType>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub public: bool,
}

impl Brain {
    pub fn from_result(result: &QuizResult, user_id: Option<String>) -> Self {
        Self {
            brain_id: result.brain_id.clone(),
            user_id,
            archetype: result.archetype,
            dimensions: result.dimensions.clone(),
            node_count: result.node_count,
            connection_count: result.connection_count,
            twins: Vec::new(),
            created_at: result.created_at.clone(),
            updated_at: None,
            public: false,
        }
    }

    pub fn signature(&self) -> BrainSignature<'_> {
        BrainSignature::new(&self.brain_id, &self.dimensions, self.archetype)
    }

    pub fn stats(&self) -> BrainStats {
        BrainStats::from_brain(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrainStats {
    pub brain_id: String,
    pub archetype: Archetype,
    pub node_count: u32,
    pub connection_count: u32,
    pub density: f64,
    pub avg_connections: f64,
    pub dimensions: DimensionVector,
}

impl BrainStats {
    pub fn from_brain(brain: &Brain) -> Self {
        let ratio = if brain.node_count > 0 {
            f64::from(brain.connection_count) / f64::from(brain.node_count)
        } else {
            0.0
        };

        Self {
            brain_id: brain.brain_id.clone(),
            archetype: brain.archetype,
            node_count: brain.node_count,
            connection_count: brain.connection_count,
            density: round_to(ratio, 4),
            avg_connections: round_to(ratio, 2),
            dimensions: brain.dimensions.clone(),
        }
    }
}
