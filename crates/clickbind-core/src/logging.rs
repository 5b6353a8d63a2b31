#![forbid(unsafe_code)]

//! Logging shim and logging configuration.
//!
//! With the `tracing` feature the usual `tracing` macros are re-exported here
//! (and at the crate root). Without it, same-named macros expand to nothing
//! so call sites never need their own `cfg` guards.
//!
//! [`LogConfig`] reads its settings from the environment:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `CLICKBIND_LOG` | `EnvFilter` directive | `info` |
//! | `CLICKBIND_LOG_FORMAT` | `json` or `pretty` | `pretty` |
//!
//! Installing a global subscriber ([`LogConfig::init`]) requires the
//! `tracing-json` feature.

#[cfg(feature = "tracing")]
pub use tracing::{debug, info, trace, warn};

/// No-op `debug!` used when the `tracing` feature is disabled.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

/// No-op `info!` used when the `tracing` feature is disabled.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {};
}

/// No-op `trace!` used when the `tracing` feature is disabled.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

/// No-op `warn!` used when the `tracing` feature is disabled.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

/// Environment variable holding the filter directive.
pub const LOG_FILTER_ENV: &str = "CLICKBIND_LOG";
/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "CLICKBIND_LOG_FORMAT";

/// Output format for the global subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parse a format name. Case-insensitive; surrounding whitespace ignored.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" | "jsonl" => Some(Self::Json),
            "pretty" | "text" | "plain" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `"clickbind_widgets=debug,info"`.
    pub filter: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl LogConfig {
    /// Read the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Read the configuration using a custom environment lookup.
    ///
    /// Empty filters and unknown formats fall back to the defaults.
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(filter) = get_env(LOG_FILTER_ENV) {
            let filter = filter.trim();
            if !filter.is_empty() {
                config.filter = filter.to_string();
            }
        }
        if let Some(format) = get_env(LOG_FORMAT_ENV).as_deref().and_then(LogFormat::parse) {
            config.format = format;
        }
        config
    }

    /// Set the filter directive.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Set the output format.
    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Install a global `tracing` subscriber for this configuration.
    #[cfg(feature = "tracing-json")]
    pub fn init(&self) -> Result<(), LogInitError> {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_new(&self.filter)
            .map_err(|err| LogInitError::InvalidFilter(err.to_string()))?;
        let builder = tracing_subscriber::fmt().with_env_filter(filter);
        let result = match self.format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Pretty => builder.try_init(),
        };
        result.map_err(|err| LogInitError::AlreadyInitialized(err.to_string()))
    }
}

/// Errors from installing the global subscriber.
#[cfg(feature = "tracing-json")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogInitError {
    /// The filter directive did not parse.
    InvalidFilter(String),
    /// A global subscriber was already set.
    AlreadyInitialized(String),
}

#[cfg(feature = "tracing-json")]
impl std::fmt::Display for LogInitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFilter(msg) => write!(f, "invalid log filter: {msg}"),
            Self::AlreadyInitialized(msg) => write!(f, "logging already initialized: {msg}"),
        }
    }
}

#[cfg(feature = "tracing-json")]
impl std::error::Error for LogInitError {}
