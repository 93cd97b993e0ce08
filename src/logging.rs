use std::{
    fs, io,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use anyhow::{Context, Result, anyhow};
use tracing::Span;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};
use uuid::Uuid;

use crate::config::{LoggingConfig, LoggingRotation};

const LOG_FILE_PREFIX: &str = "mirrorbrain.log";
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Keeps the file writer alive for the whole invocation.
pub struct LoggingGuard {
    _writer_guard: WorkerGuard,
    run_id: Uuid,
}

impl LoggingGuard {
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Root span for one CLI invocation. File log lines emitted inside it
    /// carry `run_id` and `command`.
    pub fn command_span(&self, command: &str) -> Span {
        tracing::info_span!("invocation", run_id = %self.run_id, command)
    }
}

pub fn init_tracing(config: &LoggingConfig) -> Result<LoggingGuard> {
    let filter = parse_filter(&config.filter)?;
    let log_dir = prepare_log_dir(&config.dir)?;
    let sweep = sweep_expired_logs(
        &log_dir,
        LOG_FILE_PREFIX,
        retention(config.retention_days),
        SystemTime::now(),
    );

    let appender = match config.rotation {
        LoggingRotation::Daily => rolling::daily(&log_dir, LOG_FILE_PREFIX),
        LoggingRotation::Hourly => rolling::hourly(&log_dir, LOG_FILE_PREFIX),
    };
    let (writer, writer_guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true)
        .with_span_list(false)
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(filter);

    // stdout is reserved for command output.
    let stderr_layer = config.stderr_warn_enabled.then(|| {
        fmt::layer()
            .with_writer(io::stderr)
            .with_filter(LevelFilter::WARN)
    });

    tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    let run_id = Uuid::now_v7();
    tracing::info!(
        target: "logging",
        run_id = %run_id,
        dir = %log_dir.display(),
        rotation = ?config.rotation,
        expired_removed = sweep.removed.len(),
        "logging_initialized"
    );
    for problem in &sweep.problems {
        tracing::warn!(target: "logging", problem = %problem, "log_sweep_problem");
    }

    Ok(LoggingGuard {
        _writer_guard: writer_guard,
        run_id,
    })
}

fn parse_filter(filter: &str) -> Result<EnvFilter> {
    let filter = filter.trim();
    if filter.is_empty() {
        return Err(anyhow!("logging.filter cannot be empty"));
    }
    EnvFilter::try_new(filter).with_context(|| format!("invalid logging.filter '{filter}'"))
}

fn prepare_log_dir(dir: &Path) -> Result<PathBuf> {
    if dir.as_os_str().is_empty() {
        return Err(anyhow!("logging.dir cannot be empty"));
    }
    let dir = std::path::absolute(dir)
        .with_context(|| format!("cannot resolve logging.dir {}", dir.display()))?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("cannot create logging.dir {}", dir.display()))?;
    Ok(dir)
}

fn retention(days: usize) -> Duration {
    Duration::from_secs((days as u64).saturating_mul(SECONDS_PER_DAY))
}

#[derive(Debug, Default)]
struct LogSweep {
    removed: Vec<PathBuf>,
    problems: Vec<String>,
}

/// Deletes prefixed log files older than `max_age`. Failures are collected,
/// never raised, so a stale file cannot keep the CLI from starting.
fn sweep_expired_logs(dir: &Path, prefix: &str, max_age: Duration, now: SystemTime) -> LogSweep {
    let cutoff = now.checked_sub(max_age).unwrap_or(SystemTime::UNIX_EPOCH);
    let mut sweep = LogSweep::default();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            sweep
                .problems
                .push(format!("cannot list {}: {err}", dir.display()));
            return sweep;
        }
    };

    for entry in entries {
        match expired_log(entry, prefix, cutoff) {
            Ok(Some(path)) => match fs::remove_file(&path) {
                Ok(()) => sweep.removed.push(path),
                Err(err) => sweep
                    .problems
                    .push(format!("cannot remove {}: {err}", path.display())),
            },
            Ok(None) => {}
            Err(problem) => sweep.problems.push(problem),
        }
    }

    sweep
}

fn expired_log(
    entry: io::Result<fs::DirEntry>,
    prefix: &str,
    cutoff: SystemTime,
) -> Result<Option<PathBuf>, String> {
    let entry = entry.map_err(|err| format!("cannot read log directory entry: {err}"))?;
    if !entry.file_name().to_string_lossy().starts_with(prefix) {
        return Ok(None);
    }

    let path = entry.path();
    let metadata = entry
        .metadata()
        .map_err(|err| format!("cannot stat {}: {err}", path.display()))?;
    if !metadata.is_file() {
        return Ok(None);
    }
    let modified = metadata
        .modified()
        .map_err(|err| format!("cannot read mtime of {}: {err}", path.display()))?;

    Ok((modified <= cutoff).then_some(path))
}
