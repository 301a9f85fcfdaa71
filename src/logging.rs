//! Structured logging set-up
//!
//! Route registration logs through `tracing`; this module installs a global
//! subscriber for binaries and test harnesses that want to see it. By default
//! only this crate logs at the configured level and every other target is held
//! at `warn`, so registration output is not buried under dependency noise.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `BRRTR_LOG_LEVEL` | `info` | level for `brrtrouter_route` when `RUST_LOG` is unset |
//! | `BRRTR_LOG_FORMAT` | `json` | `json` or `pretty` |
//! | `BRRTR_LOG_TARGET_FILTER` | unset | extra comma-separated filter directives |
//! | `BRRTR_LOG_INCLUDE_LOCATION` | `false` | include file:line |
//! | `BRRTR_LOG_ASYNC` | `false` | buffer output on a background writer |
//!
//! With `BRRTR_LOG_ASYNC=true` the returned [`WorkerGuard`] owns the
//! background writer. Hold it until shutdown; dropping it flushes what is
//! still buffered.

use anyhow::{anyhow, Context, Result};
use std::env;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Filter target for events emitted by this crate
pub const CRATE_TARGET: &str = "brrtrouter_route";

/// Output encoding for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// Multi-line, human-readable
    Pretty,
}

impl LogFormat {
    /// `pretty` in any case selects [`LogFormat::Pretty`]; anything else is JSON
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token.trim().eq_ignore_ascii_case("pretty") {
            LogFormat::Pretty
        } else {
            LogFormat::Json
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level for this crate's events: trace/debug/info/warn/error
    pub log_level: String,
    pub format: LogFormat,
    /// Extra `EnvFilter` directives, comma-separated
    pub target_filter: Option<String>,
    /// Include file:line location
    pub include_location: bool,
    /// Write through a non-blocking buffered writer
    pub async_logging: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: LogFormat::Json,
            target_filter: None,
            include_location: false,
            async_logging: false,
        }
    }
}

impl LogConfig {
    /// Read the `BRRTR_LOG_*` variables, falling back to [`LogConfig::default`]
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key lookup, e.g. a map in tests.
    ///
    /// Unparseable booleans keep their default.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |key: &str, default: bool| {
            lookup(key)
                .and_then(|v| v.trim().parse::<bool>().ok())
                .unwrap_or(default)
        };

        Self {
            log_level: lookup("BRRTR_LOG_LEVEL").unwrap_or(defaults.log_level),
            format: lookup("BRRTR_LOG_FORMAT")
                .map(|v| LogFormat::from_token(&v))
                .unwrap_or(defaults.format),
            target_filter: lookup("BRRTR_LOG_TARGET_FILTER"),
            include_location: flag("BRRTR_LOG_INCLUDE_LOCATION", defaults.include_location),
            async_logging: flag("BRRTR_LOG_ASYNC", defaults.async_logging),
        }
    }

    /// The configured level, INFO when `log_level` does not parse
    #[must_use]
    pub fn level(&self) -> Level {
        self.log_level.trim().parse().unwrap_or(Level::INFO)
    }

    /// Directives used when `RUST_LOG` is unset: `warn` everywhere, the
    /// configured level for this crate
    #[must_use]
    pub fn base_directives(&self) -> String {
        format!(
            "warn,{CRATE_TARGET}={}",
            self.level().as_str().to_ascii_lowercase()
        )
    }

    /// Parse `target_filter` into directives, skipping blank entries.
    ///
    /// # Errors
    ///
    /// Names the first entry that is not a valid directive.
    pub fn target_directives(&self) -> Result<Vec<Directive>> {
        let Some(target_filter) = &self.target_filter else {
            return Ok(Vec::new());
        };
        target_filter
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                entry
                    .parse::<Directive>()
                    .map_err(|e| anyhow!("invalid log filter directive `{entry}`: {e}"))
            })
            .collect()
    }

    /// `RUST_LOG` if set, otherwise [`base_directives`](Self::base_directives),
    /// then every target directive on top.
    ///
    /// # Errors
    ///
    /// Fails on an invalid `target_filter` entry.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        let base = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.base_directives()));
        Ok(self
            .target_directives()?
            .into_iter()
            .fold(base, EnvFilter::add_directive))
    }
}

/// Initialize logging from the environment, overriding the level
///
/// # Example
///
/// ```no_run
/// use brrtrouter_route::logging;
///
/// let _guard = logging::init_logging("debug")?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Fails if a global subscriber is already installed or the target filter is
/// invalid.
pub fn init_logging(log_level: &str) -> Result<Option<WorkerGuard>> {
    let config = LogConfig {
        log_level: log_level.to_string(),
        ..LogConfig::from_env()
    };
    init_logging_with_config(&config)
}

/// Initialize logging with an explicit configuration.
///
/// Returns the background writer's guard when `async_logging` is set; keep it
/// alive for as long as events should reach stdout.
///
/// # Errors
///
/// Fails if a global subscriber is already installed or the target filter is
/// invalid.
pub fn init_logging_with_config(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let filter = config.env_filter()?;

    let (writer, guard) = if config.async_logging {
        let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stdout());
        (BoxMakeWriter::new(non_blocking), Some(guard))
    } else {
        (BoxMakeWriter::new(std::io::stdout), None)
    };

    let layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_writer(writer);
    let layer = match config.format {
        LogFormat::Json => layer.json().with_current_span(true).boxed(),
        LogFormat::Pretty => layer.pretty().boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("Failed to install the global log subscriber")?;

    Ok(guard)
}
