use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Topology,
    Velocity,
    Depth,
    Entropy,
    Evolution,
}

impl Axis {
    pub const ALL: [Axis; 5] = [
        Axis::Topology,
        Axis::Velocity,
        Axis::Depth,
        Axis::Entropy,
        Axis::Evolution,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Topology => "topology",
            Self::Velocity => "velocity",
            Self::Depth => "depth",
            Self::Entropy => "entropy",
            Self::Evolution => "evolution",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Axis::ALL
            .into_iter()
            .find(|axis| axis.as_str() == value)
            .ok_or_else(|| format!("unknown axis '{value}'"))
    }
}

/// Named per-axis scores in `[0.0, 1.0]`.
///
/// Vectors produced by the calculator always carry all five axes. Vectors
/// read from outside may be partial; comparison only looks at the axes both
/// sides carry, and unknown axis names are dropped on deserialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct DimensionVector {
    values: BTreeMap<Axis, f64>,
}

impl DimensionVector {
    pub fn neutral() -> Self {
        Self::from_values([0.5; 5])
    }

    /// Values in `Axis::ALL` order.
    pub fn from_values(values: [f64; 5]) -> Self {
        Self {
            values: Axis::ALL.into_iter().zip(values).collect(),
        }
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (Axis, f64)>) -> Self {
        Self {
            values: pairs.into_iter().collect(),
        }
    }

    pub fn get(&self, axis: Axis) -> Option<f64> {
        self.values.get(&axis).copied()
    }

    pub fn is_complete(&self) -> bool {
        Axis::ALL.iter().all(|axis| self.values.contains_key(axis))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Axis, f64)> + '_ {
        self.values.iter().map(|(axis, value)| (*axis, *value))
    }
}

impl From<BTreeMap<String, f64>> for DimensionVector {
    fn from(raw: BTreeMap<String, f64>) -> Self {
        let mut values = BTreeMap::new();
        for (name, value) in raw {
            match name.parse::<Axis>() {
                Ok(axis) => {
                    values.insert(axis, value);
                }
                Err(_) => {
                    tracing::debug!(target: "dimensions", axis = %name, "unknown_axis_dropped");
                }
            }
        }
        Self { values }
    }
}

impl From<DimensionVector> for BTreeMap<String, f64> {
    fn from(vector: DimensionVector) -> Self {
        vector
            .values
            .into_iter()
            .map(|(axis, value)| (axis.as_str().to_string(), value))
            .collect()
    }
}

/// Rounds on the exact binary value, ties to even.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}
