//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use tracing::Level;

/// Default log level when `HYDROBLT_LOG_LEVEL` is unset or unparsable
pub const DEFAULT_LOG_LEVEL: Level = Level::INFO;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum tracing level (`trace`, `debug`, `info`, `warn`, `error`)
    /// Example: HYDROBLT_LOG_LEVEL=debug
    pub log_level: Option<String>,

    /// Whether responses are compressed (brotli/gzip)
    /// Disabled by HYDROBLT_COMPRESSION=false|0|off
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("HYDROBLT_LOG_LEVEL").ok(),
            compression: std::env::var("HYDROBLT_COMPRESSION")
                .map(|value| parse_flag(&value))
                .unwrap_or(true),
        }
    }

    /// Check if a log level was configured
    pub fn has_log_level(&self) -> bool {
        self.log_level.is_some()
    }

    /// Effective tracing level, falling back to `INFO`
    pub fn max_level(&self) -> Level {
        self.log_level
            .as_deref()
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Anything other than an explicit "off" value enables the flag
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "off" | "no"
    )
}
