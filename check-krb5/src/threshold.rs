//! Severity classification of the aggregate mean latency.
//!
//! The comparison is strict greater-than at both boundaries: a mean
//! exactly equal to a threshold classifies as the lower severity. Monitoring
//! hosts depend on this exact semantics, so it is pinned down by tests and
//! must not be weakened to greater-or-equal.

use crate::errors::ConfigError;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Plugin severity as understood by the monitoring host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Severity {
    /// Conventional monitoring-plugin label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Conventional monitoring-plugin exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated warning/critical threshold pair.
///
/// Invariant: `crit >= warn`, enforced at construction. A benchmark whose
/// critical threshold is tighter than its warning threshold is nonsensical
/// and is rejected before any trial runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Thresholds {
    #[serde(with = "crate::stats::secs")]
    warn: Duration,
    #[serde(with = "crate::stats::secs")]
    crit: Duration,
}

impl Thresholds {
    /// Build a threshold pair, rejecting `crit < warn`.
    pub fn new(warn: Duration, crit: Duration) -> Result<Self, ConfigError> {
        if crit < warn {
            return Err(ConfigError::ThresholdOrder { warn, crit });
        }
        Ok(Self { warn, crit })
    }

    pub fn warn(&self) -> Duration {
        self.warn
    }

    pub fn crit(&self) -> Duration {
        self.crit
    }

    /// Classify a mean latency.
    pub fn classify(&self, mean: Duration) -> Severity {
        if mean > self.crit {
            Severity::Critical
        } else if mean > self.warn {
            Severity::Warning
        } else {
            Severity::Ok
        }
    }
}
