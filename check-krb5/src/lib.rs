//! Nagios-compatible Kerberos KDC latency probe.
//!
//! The probe runs a fixed number of sequential, paced credential
//! acquisitions against a KDC, times each attempt, aggregates the
//! latencies, classifies the mean against warning/critical thresholds,
//! and renders a monitoring-plugin status line plus perfdata.
//!
//! Runs are stateless: nothing persists across invocations, and a single
//! failed trial aborts the whole benchmark.
#![forbid(unsafe_code)]

pub mod auth;
pub mod bench;
pub mod config;
pub mod errors;
pub mod logging;
pub mod principal;
pub mod report;
pub mod stats;
pub mod testing;
pub mod threshold;

pub use auth::{Authenticator, Credential, KinitAuthenticator};
pub use bench::BenchmarkRunner;
pub use config::{CredentialSource, ProbeConfig, RawConfig};
pub use errors::{AuthError, ConfigError, ProbeError};
pub use logging::{LogConfig, init_logging};
pub use principal::Principal;
pub use report::ProbeReport;
pub use stats::LatencyStats;
pub use threshold::{Severity, Thresholds};
