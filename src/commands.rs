use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use serde_json::{Value, json};

use crate::{
    BrainScanner,
    brain::{ScanReport, famous_brain, famous_keys, load_brain},
    cli::Command,
    scan::{QuizRequest, QuizSubmission},
    twins::{brief, twin_profiles},
};

/// Runs one CLI command and returns the JSON document to print.
pub fn execute(scanner: &BrainScanner, command: Command) -> Result<Value> {
    match command {
        Command::Questions => Ok(json!({ "questions": scanner.questions() })),
        Command::Archetypes => render(scanner.archetypes().profiles()),
        Command::Twins => Ok(json!({ "twins": twin_profiles() })),
        Command::Scan { answers, user_id } => {
            let request = QuizRequest {
                answers: QuizSubmission::from_indices(&answers).answers,
                user_id,
            };
            let result = scanner.submit(&request)?;
            render(&ScanReport::new(result, request.user_id))
        }
        Command::Compare { first, second } => {
            let first = load_brain(&first)?;
            let second = load_brain(&second)?;
            render(&scanner.compare(first.signature(), second.signature()))
        }
        Command::Stats { brain } => render(&load_brain(&brain)?.stats()),
        Command::Famous { name: None } => Ok(json!({ "famous": famous_keys() })),
        Command::Famous { name: Some(name) } => {
            let famous =
                famous_brain(&name).ok_or_else(|| anyhow!("famous brain not found: {name}"))?;
            render(&famous)
        }
        Command::Twin { twin, brain, query } => {
            let brain = load_brain(&brain)?;
            render(&brief(twin, &brain.brain_id, Some(&brain.dimensions), &query))
        }
    }
}

fn render<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    serde_json::to_value(value).context("failed to render output")
}
