use serde::Serialize;

use crate::{
    archetype::Archetype,
    brain::types::{Brain, now_timestamp},
    dimensions::DimensionVector,
};

/// Demo brains for comparing a scan against well-known thinkers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamousBrain {
    pub key: &'static str,
    pub name: &'static str,
    pub archetype: Archetype,
    pub dimensions: DimensionVector,
    pub node_count: u32,
    pub connection_count: u32,
}

impl FamousBrain {
    pub fn to_brain(&self) -> Brain {
        Brain {
            brain_id: format!("FAMOUS-{}", self.key),
            user_id: None,
            archetype: self.archetype,
            dimensions: self.dimensions.clone(),
            node_count: self.node_count,
            connection_count: self.connection_count,
            twins: Vec::new(),
            created_at: now_timestamp(),
            updated_at: None,
            public: true,
        }
    }
}

pub fn famous_brains() -> Vec<FamousBrain> {
    vec![
        FamousBrain {
            key: "einstein",
            name: "Albert Einstein",
            archetype: Archetype::Architect,
            dimensions: DimensionVector::from_values([0.95, 0.4, 0.98, 0.7, 0.85]),
            node_count: 12_000,
            connection_count: 2_800,
        },
        FamousBrain {
            key: "davinci",
            name: "Leonardo da Vinci",
            archetype: Archetype::Explorer,
            dimensions: DimensionVector::from_values([0.99, 0.6, 0.9, 0.95, 0.8]),
            node_count: 15_000,
            connection_count: 4_200,
        },
        FamousBrain {
            key: "jobs",
            name: "Steve Jobs",
            archetype: Archetype::Builder,
            dimensions: DimensionVector::from_values([0.75, 0.95, 0.7, 0.6, 0.9]),
            node_count: 8_500,
            connection_count: 1_900,
        },
    ]
}

pub fn famous_keys() -> Vec<&'static str> {
    famous_brains().into_iter().map(|brain| brain.key).collect()
}

pub fn famous_brain(key: &str) -> Option<FamousBrain> {
    famous_brains().into_iter().find(|brain| brain.key == key)
}
