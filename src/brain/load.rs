use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::brain::{
    famous::famous_brain,
    types::{Brain, QuizResult},
};

/// Output of a scan: the scored result and the brain record built from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub result: QuizResult,
    pub brain: Brain,
}

impl ScanReport {
    pub fn new(result: QuizResult, user_id: Option<String>) -> Self {
        let brain = Brain::from_result(&result, user_id);
        Self { result, brain }
    }
}

// Tried in order; a report also carries a result, and a result also
// satisfies every required brain field.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredBrain {
    Report { brain: Brain },
    Result(QuizResult),
    Record(Brain),
}

/// Resolves a famous-brain key, or reads a JSON file holding a scan report,
/// a quiz result or a brain record.
pub fn load_brain(reference: &str) -> Result<Brain> {
    if let Some(famous) = famous_brain(reference) {
        return Ok(famous.to_brain());
    }

    let path = Path::new(reference);
    let content = fs::read_to_string(path)
        .with_context(|| format!("'{reference}' is neither a famous brain nor a readable file"))?;
    let stored: StoredBrain = serde_json::from_str(&content).with_context(|| {
        format!(
            "{} holds no brain, scan report or quiz result",
            path.display()
        )
    })?;

    let brain = match stored {
        StoredBrain::Report { brain } | StoredBrain::Record(brain) => brain,
        StoredBrain::Result(result) => Brain::from_result(&result, None),
    };
    tracing::debug!(target: "brain", brain_id = %brain.brain_id, path = %path.display(), "brain_loaded");
    Ok(brain)
}
