//! Logging initialization.
//!
//! All diagnostics go to stderr. Stdout is reserved for the single plugin
//! status line that the monitoring host parses, so nothing else may ever
//! be printed there.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for a filter directive.
pub const LOG_ENV_VAR: &str = "CHECK_KRB5_LOG";

/// Logging configuration resolved from the environment plus CLI flags.
#[derive(Debug, Clone)]
pub struct LogConfig {
    default_level: String,
}

impl LogConfig {
    /// Start from a default level; `CHECK_KRB5_LOG` overrides it when set.
    pub fn from_env(default_level: &str) -> Self {
        Self {
            default_level: default_level.to_string(),
        }
    }

    /// Replace the default level (used by `--verbose`).
    #[must_use]
    pub fn with_level(mut self, level: &str) -> Self {
        self.default_level = level.to_string();
        self
    }

    pub fn level(&self) -> &str {
        &self.default_level
    }
}

/// Install the global subscriber. Safe to call once per process.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config.level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        let config = LogConfig::from_env("info");
        assert_eq!(config.level(), "info");
    }

    #[test]
    fn test_with_level_overrides() {
        let config = LogConfig::from_env("info").with_level("debug");
        assert_eq!(config.level(), "debug");
    }
}
