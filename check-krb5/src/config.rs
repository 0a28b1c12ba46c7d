//! Probe configuration: duration parsing, trial count, credential material.
//!
//! All validation happens here, before any trial runs. A configuration
//! failure is reported to the monitoring host as UNKNOWN and the
//! credential-acquisition collaborator is never invoked.

use crate::errors::ConfigError;
use crate::principal::Principal;
use crate::threshold::Thresholds;
use std::path::PathBuf;
use std::time::Duration;

/// Default pacing interval between trials.
pub const DEFAULT_INTERVAL: &str = "1s";
/// Default warning threshold for the mean latency.
pub const DEFAULT_WARN: &str = "1s";
/// Default critical threshold for the mean latency.
pub const DEFAULT_CRIT: &str = "5s";

/// Parse a duration flag, naming the offending field on failure.
pub fn parse_duration_field(field: &'static str, value: &str) -> Result<Duration, ConfigError> {
    humantime::parse_duration(value).map_err(|source| ConfigError::InvalidDuration {
        field,
        value: value.to_string(),
        source,
    })
}

/// Credential material used to authenticate the client principal.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    Password(String),
    Keytab(PathBuf),
}

impl CredentialSource {
    /// Resolve the password/keytab flag pair into one source.
    ///
    /// Exactly one of the two must be given.
    pub fn from_options(
        password: Option<String>,
        keytab: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        match (password, keytab) {
            (Some(_), Some(_)) => Err(ConfigError::CredentialMaterial(
                "--password and --keytab are mutually exclusive",
            )),
            (Some(password), None) => Ok(Self::Password(password)),
            (None, Some(path)) => {
                if !path.exists() {
                    return Err(ConfigError::KeytabNotFound { path });
                }
                Ok(Self::Keytab(path))
            }
            (None, None) => Err(ConfigError::CredentialMaterial(
                "one of --password or --keytab must be specified",
            )),
        }
    }
}

/// Raw, still-textual probe options as collected from the CLI.
#[derive(Debug, Clone)]
pub struct RawConfig {
    pub client: String,
    pub service: String,
    pub count: u32,
    pub interval: String,
    pub warn: String,
    pub crit: String,
    pub password: Option<String>,
    pub keytab: Option<PathBuf>,
}

/// Fully validated probe configuration.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub client: Principal,
    pub service: Principal,
    pub credentials: CredentialSource,
    pub count: u32,
    pub interval: Duration,
    pub thresholds: Thresholds,
}

impl ProbeConfig {
    /// Validate a raw configuration.
    pub fn resolve(raw: RawConfig) -> Result<Self, ConfigError> {
        if raw.count == 0 {
            return Err(ConfigError::InvalidCount);
        }

        let interval = parse_duration_field("interval", &raw.interval)?;
        let warn = parse_duration_field("warning threshold", &raw.warn)?;
        let crit = parse_duration_field("critical threshold", &raw.crit)?;
        let thresholds = Thresholds::new(warn, crit)?;

        let client = Principal::parse("client", &raw.client)?;
        let service = Principal::parse("service", &raw.service)?;
        let credentials = CredentialSource::from_options(raw.password, raw.keytab)?;

        Ok(Self {
            client,
            service,
            credentials,
            count: raw.count,
            interval,
            thresholds,
        })
    }
}
