//! # Logging bootstrap
//!
//! The library only emits `log` records (`event=... module=... status=...`).
//! Binaries and test harnesses that want to see them call [`init_logging`]
//! once, with a [`LogSettings`] built by hand or read from the environment.
//!
//! Invariants
//! -----------------
//! * Initialization happens at most once per process.
//! * Re-initialization with the same settings is a no-op; different settings are rejected.
//! * Initialization never panics.
use camino::{Utf8Path, Utf8PathBuf};
use flexi_logger::{detailed_format, Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use log::info;
use once_cell::sync::OnceCell;

use crate::neo_errors::NeoError;

/// Environment variable holding the log level.
pub const LOG_LEVEL_ENV: &str = "NEO_APPROACH_LOG";
/// Environment variable holding the log directory; stderr is used when unset.
pub const LOG_DIR_ENV: &str = "NEO_APPROACH_LOG_DIR";

const LOG_FILE_BASENAME: &str = "neo_approach";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    settings: LogSettings,
    _logger: LoggerHandle,
}

/// Logger configuration.
///
/// * `level` – one of `trace|debug|info|warn|error`.
/// * `log_dir` – directory for rotating log files; `None` logs to stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub log_dir: Option<Utf8PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl LogSettings {
    /// Settings from [`LOG_LEVEL_ENV`] and [`LOG_DIR_ENV`], falling back to the defaults.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(LOG_LEVEL_ENV).ok(),
            std::env::var(LOG_DIR_ENV).ok(),
        )
    }

    fn from_values(level: Option<String>, log_dir: Option<String>) -> Self {
        LogSettings {
            level: level
                .filter(|l| !l.trim().is_empty())
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: log_dir
                .filter(|d| !d.trim().is_empty())
                .map(|d| Utf8PathBuf::from(d.trim())),
        }
    }
}

/// Default log level for the current build mode (`debug` or `info`).
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Start the logger backend.
///
/// Arguments
/// ---------
/// * `settings`: level and destination
///
/// Return
/// ------
/// * `Ok(())` when logging is active with these settings
///
/// Errors
/// ------
/// * [`NeoError::LoggingInit`] for an unsupported level, an uncreatable
///   directory, a backend failure, or settings that differ from the active ones.
pub fn init_logging(settings: &LogSettings) -> Result<(), NeoError> {
    let normalized = LogSettings {
        level: normalize_level(&settings.level)?.to_string(),
        log_dir: settings.log_dir.clone(),
    };

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(&normalized))?;

    if state.settings != normalized {
        return Err(NeoError::LoggingInit(format!(
            "logging already initialized with {:?}; refusing to switch to {:?}",
            state.settings, normalized
        )));
    }
    Ok(())
}

/// Active logging settings, `None` before [`init_logging`] succeeded.
pub fn logging_status() -> Option<LogSettings> {
    LOGGING_STATE.get().map(|state| state.settings.clone())
}

fn start_logger(settings: &LogSettings) -> Result<LoggingState, NeoError> {
    let backend_error = |err: flexi_logger::FlexiLoggerError| {
        NeoError::LoggingInit(format!("failed to start logger: {err}"))
    };

    let logger = Logger::try_with_str(&settings.level).map_err(backend_error)?;
    let logger = match &settings.log_dir {
        Some(dir) => {
            create_log_dir(dir)?;
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(dir.as_std_path())
                        .basename(LOG_FILE_BASENAME),
                )
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .append()
                .format_for_files(detailed_format)
        }
        None => logger.log_to_stderr().format_for_stderr(detailed_format),
    };
    let handle = logger.start().map_err(backend_error)?;

    info!(
        "event=logging_init module=logging status=ok level={} destination={} version={}",
        settings.level,
        settings
            .log_dir
            .as_ref()
            .map_or("stderr", |dir| dir.as_str()),
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        settings: settings.clone(),
        _logger: handle,
    })
}

fn create_log_dir(dir: &Utf8Path) -> Result<(), NeoError> {
    std::fs::create_dir_all(dir).map_err(|err| {
        NeoError::LoggingInit(format!("failed to create log directory `{dir}`: {err}"))
    })
}

fn normalize_level(level: &str) -> Result<&'static str, NeoError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(NeoError::LoggingInit(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        ))),
    }
}
