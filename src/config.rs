use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use jsonschema::{JSONSchema, ValidationError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{resonance::ResonanceThresholds, scan::MetricsConfig};

pub const DEFAULT_CONFIG_PATH: &str = "./mirrorbrain.jsonc";

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub resonance: ResonanceThresholds,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

fn default_logging_dir() -> PathBuf {
    PathBuf::from("./logs/mirrorbrain")
}

fn default_logging_filter() -> String {
    "info".to_string()
}

fn default_logging_rotation() -> LoggingRotation {
    LoggingRotation::Daily
}

fn default_logging_retention_days() -> usize {
    14
}

fn default_enabled_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingRotation {
    Daily,
    Hourly,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_logging_filter")]
    pub filter: String,
    #[serde(default = "default_logging_rotation")]
    pub rotation: LoggingRotation,
    #[serde(default = "default_logging_retention_days")]
    #[schemars(range(min = 1))]
    pub retention_days: usize,
    #[serde(default = "default_enabled_true")]
    pub stderr_warn_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_logging_dir(),
            filter: default_logging_filter(),
            rotation: default_logging_rotation(),
            retention_days: default_logging_retention_days(),
            stderr_warn_enabled: true,
        }
    }
}

impl Config {
    /// Loads `explicit` when given. Otherwise loads the default path if it
    /// exists and falls back to built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let mut config_value: Value = json5::from_str(&config_content)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;

        let config_base = config_path.parent().unwrap_or_else(|| Path::new("."));
        let schema = resolve_schema(config_base, &config_value)?;
        if let Some(object) = config_value.as_object_mut() {
            object.remove("$schema");
        }
        validate_against_schema(&config_value, &schema)?;

        let mut config: Config =
            serde_json::from_value(config_value).context("failed to deserialize config")?;

        if !config.logging.dir.is_absolute() {
            config.logging.dir = config_base.join(&config.logging.dir);
        }

        Ok(config)
    }
}

/// Schema named by `$schema`, else the one derived from [`Config`].
fn resolve_schema(config_base: &Path, config_value: &Value) -> Result<Value> {
    let Some(path_text) = config_value.get("$schema").and_then(|value| value.as_str()) else {
        return generated_schema();
    };

    let configured = PathBuf::from(path_text);
    let schema_path = if configured.is_absolute() {
        configured
    } else {
        config_base.join(&configured)
    };

    let schema_content = fs::read_to_string(&schema_path)
        .with_context(|| format!("failed to read schema {}", schema_path.display()))?;
    serde_json::from_str(&schema_content)
        .with_context(|| format!("failed to parse schema {}", schema_path.display()))
}

pub fn generated_schema() -> Result<Value> {
    serde_json::to_value(schemars::schema_for!(Config)).context("failed to render config schema")
}

fn validate_against_schema(config_value: &Value, schema: &Value) -> Result<()> {
    let compiled =
        JSONSchema::compile(schema).map_err(|e| anyhow!("failed to compile schema: {e}"))?;

    match compiled.validate(config_value) {
        Ok(()) => Ok(()),
        Err(errors_iter) => {
            let validation_errors: Vec<ValidationError> = errors_iter.collect();
            let messages: Vec<String> = validation_errors
                .into_iter()
                .map(|error| error.to_string())
                .collect();
            Err(anyhow!("config validation failed: {}", messages.join("; ")))
        }
    }
}
