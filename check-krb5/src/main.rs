//! Nagios-compatible Kerberos KDC latency probe CLI.
#![forbid(unsafe_code)]

use check_krb5::bench::BenchmarkRunner;
use check_krb5::config::{DEFAULT_CRIT, DEFAULT_INTERVAL, DEFAULT_WARN, ProbeConfig, RawConfig};
use check_krb5::report::ProbeReport;
use check_krb5::stats::LatencyStats;
use check_krb5::threshold::Severity;
use check_krb5::{KinitAuthenticator, LogConfig, init_logging};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "check_krb5",
    about = "Benchmark Kerberos credential acquisition latency for a monitoring host",
    version
)]
struct Cli {
    /// Client principal to authenticate as
    #[arg(short = 'c', long)]
    client: String,

    /// Service principal to request a ticket for
    #[arg(short = 's', long)]
    service: String,

    /// Number of authentication trials to run
    #[arg(short = 'n', long, default_value_t = 1)]
    count: u32,

    /// Pause between trials (e.g. 500ms, 2s)
    #[arg(short = 'i', long, default_value = DEFAULT_INTERVAL)]
    interval: String,

    /// Warning threshold for the mean latency
    #[arg(short = 'W', long, default_value = DEFAULT_WARN)]
    warn: String,

    /// Critical threshold for the mean latency
    #[arg(short = 'C', long, default_value = DEFAULT_CRIT)]
    crit: String,

    /// Keytab path (instead of a password)
    #[arg(short = 'k', long, env = "KTNAME")]
    keytab: Option<PathBuf>,

    /// Password for the client principal
    #[arg(short = 'P', long)]
    password: Option<String>,

    /// Output format (nagios or json)
    #[arg(long, value_enum, default_value = "nagios")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy)]
enum OutputFormat {
    Nagios,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env("warn");
    if cli.verbose {
        log_config = log_config.with_level("debug");
    }
    // Logging is best-effort; the plugin line must be emitted regardless.
    let _ = init_logging(&log_config);

    let format = cli.format;
    let report = run(cli);

    let line = match format {
        OutputFormat::Nagios => report.render(),
        OutputFormat::Json => report.to_json().unwrap_or_else(|_| report.render()),
    };
    println!("{}", line);
    std::process::exit(report.exit_code());
}

fn run(cli: Cli) -> ProbeReport {
    let config = match ProbeConfig::resolve(RawConfig {
        client: cli.client,
        service: cli.service,
        count: cli.count,
        interval: cli.interval,
        warn: cli.warn,
        crit: cli.crit,
        password: cli.password,
        keytab: cli.keytab,
    }) {
        Ok(config) => config,
        Err(err) => return ProbeReport::failure(Severity::Unknown, err.to_string()),
    };

    let authenticator = match KinitAuthenticator::new(config.credentials.clone()) {
        Ok(authenticator) => authenticator,
        Err(err) => {
            return ProbeReport::failure(
                Severity::Unknown,
                format!("failed to prepare credential cache: {}", err),
            );
        }
    };

    debug!(
        client = %config.client,
        service = %config.service,
        count = config.count,
        interval_ms = config.interval.as_millis() as u64,
        "starting benchmark"
    );

    let runner = BenchmarkRunner::new(config.count, config.interval);
    let samples = match runner.run(&authenticator, &config.client, &config.service) {
        Ok(samples) => samples,
        Err(err) => return ProbeReport::failure(Severity::Critical, err.to_string()),
    };

    let Some(stats) = LatencyStats::from_samples(&samples) else {
        // Unreachable while count >= 1 holds; reported rather than panicked.
        return ProbeReport::failure(Severity::Unknown, "no trials were recorded");
    };

    info!(
        count = stats.count,
        mean_us = stats.mean.as_micros() as u64,
        min_us = stats.min.as_micros() as u64,
        max_us = stats.max.as_micros() as u64,
        "benchmark complete"
    );

    ProbeReport::success(&config.client, &config.service, stats, config.thresholds)
}
