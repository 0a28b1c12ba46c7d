//! Report rendering: status line, perfdata fragment, JSON form.
//!
//! The default output is a single Nagios-style line on stdout,
//! `<LABEL>: <message> | <perfdata>`, with the conventional exit code.
//! Pre-trial failures carry no perfdata. The JSON form carries the same
//! information plus the aggregate statistics for consumption outside a
//! Nagios host.

use crate::principal::Principal;
use crate::stats::LatencyStats;
use crate::threshold::{Severity, Thresholds};
use chrono::{DateTime, Utc};
use humantime::format_duration;
use serde::Serialize;

/// Performance-data fragment in the fixed monitoring-tool syntax:
/// `t_avg=<mean>:<warn>:<crit>:<min>:<max>`, seconds as `%.6f`.
pub fn perfdata(stats: &LatencyStats, thresholds: &Thresholds) -> String {
    format!(
        "t_avg={:.6}:{:.6}:{:.6}:{:.6}:{:.6}",
        stats.mean.as_secs_f64(),
        thresholds.warn().as_secs_f64(),
        thresholds.crit().as_secs_f64(),
        stats.min.as_secs_f64(),
        stats.max.as_secs_f64(),
    )
}

/// Human-readable run summary naming the principals and the aggregate.
pub fn summary_line(client: &Principal, service: &Principal, stats: &LatencyStats) -> String {
    format!(
        "Authenticated as {} to {} (avg: {}, min: {}, max: {}, i: {})",
        client,
        service,
        format_duration(stats.mean),
        format_duration(stats.min),
        format_duration(stats.max),
        stats.count,
    )
}

/// Final probe outcome handed to the monitoring host.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub status: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<LatencyStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Thresholds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perfdata: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ProbeReport {
    /// Report for a completed benchmark run.
    pub fn success(
        client: &Principal,
        service: &Principal,
        stats: LatencyStats,
        thresholds: Thresholds,
    ) -> Self {
        Self {
            status: thresholds.classify(stats.mean),
            message: summary_line(client, service, &stats),
            stats: Some(stats),
            thresholds: Some(thresholds),
            perfdata: Some(perfdata(&stats, &thresholds)),
            timestamp: Utc::now(),
        }
    }

    /// Report for a run that failed before producing statistics.
    pub fn failure(status: Severity, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            stats: None,
            thresholds: None,
            perfdata: None,
            timestamp: Utc::now(),
        }
    }

    /// Nagios-style plugin line.
    pub fn render(&self) -> String {
        match &self.perfdata {
            Some(perfdata) => format!("{}: {} | {}", self.status.label(), self.message, perfdata),
            None => format!("{}: {}", self.status.label(), self.message),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn exit_code(&self) -> i32 {
        self.status.exit_code()
    }
}
