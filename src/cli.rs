use std::{env, path::PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::twins::TwinType;

const USAGE: &str = "usage: mirrorbrain [--config <path>] <command>
commands:
  questions
  archetypes
  twins
  scan <answer-index>... [--user <id>]
  compare <brain> <brain>
  stats <brain>
  famous [name]
  twin <guardian|scout|synthesizer|mirror> <brain> <query>...
<brain> is a famous brain name or a path to a brain / quiz result JSON file";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Questions,
    Archetypes,
    Twins,
    Scan {
        answers: Vec<u32>,
        user_id: Option<String>,
    },
    Compare {
        first: String,
        second: String,
    },
    Stats {
        brain: String,
    },
    Famous {
        name: Option<String>,
    },
    Twin {
        twin: TwinType,
        brain: String,
        query: String,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Questions => "questions",
            Self::Archetypes => "archetypes",
            Self::Twins => "twins",
            Self::Scan { .. } => "scan",
            Self::Compare { .. } => "compare",
            Self::Stats { .. } => "stats",
            Self::Famous { .. } => "famous",
            Self::Twin { .. } => "twin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub command: Command,
}

pub fn cli_args() -> Result<CliArgs> {
    parse_args(env::args().skip(1))
}

pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut args = args.into_iter().peekable();
    let mut config_path = None;

    if args.peek().map(String::as_str) == Some("--config") {
        args.next();
        let value = args
            .next()
            .ok_or_else(|| anyhow!("missing value for --config\n{USAGE}"))?;
        config_path = Some(PathBuf::from(value));
    }

    let name = args
        .next()
        .ok_or_else(|| anyhow!("missing command\n{USAGE}"))?;
    let rest: Vec<String> = args.collect();

    let command = match name.as_str() {
        "questions" => no_operands(Command::Questions, &rest)?,
        "archetypes" => no_operands(Command::Archetypes, &rest)?,
        "twins" => no_operands(Command::Twins, &rest)?,
        "scan" => parse_scan(rest)?,
        "compare" => match rest.as_slice() {
            [first, second] => Command::Compare {
                first: first.clone(),
                second: second.clone(),
            },
            _ => return Err(anyhow!("compare expects exactly two brains\n{USAGE}")),
        },
        "stats" => match rest.as_slice() {
            [brain] => Command::Stats {
                brain: brain.clone(),
            },
            _ => return Err(anyhow!("stats expects exactly one brain\n{USAGE}")),
        },
        "famous" => match rest.as_slice() {
            [] => Command::Famous { name: None },
            [name] => Command::Famous {
                name: Some(name.clone()),
            },
            _ => return Err(anyhow!("famous expects at most one name\n{USAGE}")),
        },
        "twin" => match rest.as_slice() {
            [twin, brain, query @ ..] if !query.is_empty() => Command::Twin {
                twin: twin.parse().map_err(|err: String| anyhow!(err))?,
                brain: brain.clone(),
                query: query.join(" "),
            },
            _ => return Err(anyhow!("twin expects a twin type, a brain and a query\n{USAGE}")),
        },
        other => return Err(anyhow!("unknown command: {other}\n{USAGE}")),
    };

    Ok(CliArgs {
        config_path,
        command,
    })
}

fn no_operands(command: Command, rest: &[String]) -> Result<Command> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(anyhow!("unexpected argument: {}\n{USAGE}", rest[0]))
    }
}

fn parse_scan(rest: Vec<String>) -> Result<Command> {
    let mut answers = Vec::new();
    let mut user_id = None;
    let mut rest = rest.into_iter();

    while let Some(arg) = rest.next() {
        if arg == "--user" {
            let value = rest
                .next()
                .ok_or_else(|| anyhow!("missing value for --user\n{USAGE}"))?;
            user_id = Some(value);
            continue;
        }
        let index = arg
            .parse::<u32>()
            .with_context(|| format!("answer index '{arg}' is not a non-negative integer"))?;
        answers.push(index);
    }

    Ok(Command::Scan { answers, user_id })
}
