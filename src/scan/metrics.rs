use std::sync::{Arc, Mutex};

use rand::{Rng, SeedableRng, rngs::StdRng};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dimensions::{Axis, DimensionVector};

const NODES_PER_TOPOLOGY: f64 = 3000.0;
const NODES_PER_DEPTH: f64 = 2000.0;
const CONNECTIONS_PER_TOPOLOGY: f64 = 600.0;
const CONNECTIONS_PER_ENTROPY: f64 = 300.0;

fn default_base_nodes() -> u32 {
    1000
}

fn default_base_connections() -> u32 {
    200
}

fn default_node_jitter() -> u32 {
    200
}

fn default_connection_jitter() -> u32 {
    50
}

fn default_node_floor() -> u32 {
    500
}

fn default_connection_floor() -> u32 {
    100
}

/// Display-only brain size metrics. Never read by classification or
/// resonance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MetricsConfig {
    #[serde(default = "default_base_nodes")]
    pub base_nodes: u32,
    #[serde(default = "default_base_connections")]
    pub base_connections: u32,
    #[serde(default = "default_node_jitter")]
    pub node_jitter: u32,
    #[serde(default = "default_connection_jitter")]
    pub connection_jitter: u32,
    #[serde(default = "default_node_floor")]
    pub node_floor: u32,
    #[serde(default = "default_connection_floor")]
    pub connection_floor: u32,
    /// Fixed seed for reproducible metrics; thread-local randomness when unset.
    #[serde(default)]
    pub jitter_seed: Option<u64>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            base_nodes: default_base_nodes(),
            base_connections: default_base_connections(),
            node_jitter: default_node_jitter(),
            connection_jitter: default_connection_jitter(),
            node_floor: default_node_floor(),
            connection_floor: default_connection_floor(),
            jitter_seed: None,
        }
    }
}

impl MetricsConfig {
    pub fn jitter(&self) -> Arc<dyn MetricJitter> {
        match self.jitter_seed {
            Some(seed) => Arc::new(SeededJitter::new(seed)),
            None => Arc::new(ThreadRngJitter),
        }
    }
}

pub trait MetricJitter: Send + Sync {
    /// A sample in `[-bound, bound]`.
    fn sample(&self, bound: u32) -> i64;
}

#[derive(Debug, Clone, Default)]
pub struct ThreadRngJitter;

impl MetricJitter for ThreadRngJitter {
    fn sample(&self, bound: u32) -> i64 {
        let bound = i64::from(bound);
        rand::thread_rng().gen_range(-bound..=bound)
    }
}

#[derive(Debug, Clone, Default)]
pub struct NoJitter;

impl MetricJitter for NoJitter {
    fn sample(&self, _bound: u32) -> i64 {
        0
    }
}

#[derive(Debug)]
pub struct SeededJitter {
    rng: Mutex<StdRng>,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl MetricJitter for SeededJitter {
    fn sample(&self, bound: u32) -> i64 {
        let bound = i64::from(bound);
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(-bound..=bound)
    }
}

pub(crate) fn brain_metrics(
    dimensions: &DimensionVector,
    config: &MetricsConfig,
    jitter: &dyn MetricJitter,
) -> (u32, u32) {
    let topology = dimensions.get(Axis::Topology).unwrap_or(0.5);
    let depth = dimensions.get(Axis::Depth).unwrap_or(0.5);
    let entropy = dimensions.get(Axis::Entropy).unwrap_or(0.5);

    let node_noise = bounded_sample(jitter, config.node_jitter);
    let connection_noise = bounded_sample(jitter, config.connection_jitter);

    let nodes = (f64::from(config.base_nodes)
        + topology * NODES_PER_TOPOLOGY
        + depth * NODES_PER_DEPTH
        + node_noise as f64) as i64;
    let connections = (f64::from(config.base_connections)
        + topology * CONNECTIONS_PER_TOPOLOGY
        + entropy * CONNECTIONS_PER_ENTROPY
        + connection_noise as f64) as i64;

    (
        floor_count(nodes, config.node_floor),
        floor_count(connections, config.connection_floor),
    )
}

fn bounded_sample(jitter: &dyn MetricJitter, bound: u32) -> i64 {
    let limit = i64::from(bound);
    jitter.sample(bound).clamp(-limit, limit)
}

fn floor_count(value: i64, floor: u32) -> u32 {
    value.clamp(i64::from(floor), i64::from(u32::MAX)) as u32
}
