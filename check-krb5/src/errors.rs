//! Error taxonomy for the probe.
//!
//! Two failure families exist. Configuration problems are detected before
//! any trial runs and surface as UNKNOWN; authentication failures happen
//! inside a trial and surface as CRITICAL. Every error is terminal to the
//! run: the probe never retries and never reports partial statistics.

use crate::threshold::Severity;
use std::path::PathBuf;
use std::time::Duration;

/// Errors detected while resolving the probe configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A duration flag did not parse.
    #[error("invalid duration for {field}: '{value}': {source}")]
    InvalidDuration {
        field: &'static str,
        value: String,
        #[source]
        source: humantime::DurationError,
    },

    /// Critical threshold tighter than warning.
    #[error("critical threshold ({crit:?}) must not be lower than warning threshold ({warn:?})")]
    ThresholdOrder { warn: Duration, crit: Duration },

    /// Trial count of zero.
    #[error("trial count must be at least 1")]
    InvalidCount,

    /// A principal name did not parse.
    #[error("invalid {field} principal '{value}': {reason}")]
    InvalidPrincipal {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// No usable credential material, or conflicting material.
    #[error("{0}")]
    CredentialMaterial(&'static str),

    /// The configured keytab does not exist.
    #[error("keytab not found: {path}")]
    KeytabNotFound { path: PathBuf },
}

/// Errors raised by the credential-acquisition collaborator during a trial.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The helper binary could not be launched at all.
    #[error("failed to launch {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The KDC (or the helper on its behalf) refused the request.
    #[error("credential acquisition failed: {detail}")]
    Rejected { detail: String },

    /// I/O failure while talking to the helper process.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level probe error, mapping each family onto a plugin severity.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl ProbeError {
    /// Severity reported to the monitoring host for this error.
    ///
    /// Configuration problems are UNKNOWN (the benchmark never ran).
    /// Authentication failures are CRITICAL, unconditionally, without any
    /// numeric threshold comparison.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Config(_) => Severity::Unknown,
            Self::Auth(_) => Severity::Critical,
        }
    }
}
