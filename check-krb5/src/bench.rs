//! Trial executor: sequential, paced, timed credential acquisitions.
//!
//! Trials run strictly in program order, one at a time. Each trial is the
//! wall-clock time of one synchronous [`Authenticator::acquire`] call. The
//! pacing sleep runs after every trial, the last one included, matching the
//! original tool's observed behavior; the tail sleep is deliberate
//! load-shaping, not a bug to fix here.

use crate::auth::Authenticator;
use crate::errors::AuthError;
use crate::principal::Principal;
use std::time::{Duration, Instant};
use tracing::debug;

/// Runs a fixed number of paced authentication trials.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkRunner {
    count: u32,
    interval: Duration,
}

impl BenchmarkRunner {
    /// Create a runner. `count` must be at least 1; configuration
    /// validation upstream guarantees this.
    pub fn new(count: u32, interval: Duration) -> Self {
        debug_assert!(count >= 1, "trial count validated upstream");
        Self { count, interval }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Execute all trials and return the ordered latency sequence.
    ///
    /// Fail-fast: the first authentication error aborts the run with no
    /// partial statistics, since latencies from an erroring sequence are
    /// not meaningful for threshold comparison.
    pub fn run(
        &self,
        authenticator: &dyn Authenticator,
        client: &Principal,
        service: &Principal,
    ) -> Result<Vec<Duration>, AuthError> {
        let mut samples = Vec::with_capacity(self.count as usize);

        for trial in 1..=self.count {
            let start = Instant::now();
            let credential = authenticator.acquire(client, service)?;
            let elapsed = start.elapsed();

            debug!(
                trial,
                total = self.count,
                client = %credential.client,
                elapsed_us = elapsed.as_micros() as u64,
                "trial complete"
            );
            samples.push(elapsed);

            // Pacing applies after every trial, including the last.
            std::thread::sleep(self.interval);
        }

        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::principal::Principal;
    use crate::testing::MockAuthenticator;

    fn principals() -> (Principal, Principal) {
        (
            Principal::parse("client", "alice@EXAMPLE.COM").unwrap(),
            Principal::parse("service", "krbtgt/EXAMPLE.COM@EXAMPLE.COM").unwrap(),
        )
    }

    #[test]
    fn test_sequence_length_equals_count() {
        let (client, service) = principals();
        for count in [1u32, 2, 5, 17] {
            let authenticator = MockAuthenticator::new();
            let runner = BenchmarkRunner::new(count, Duration::ZERO);
            let samples = runner.run(&authenticator, &client, &service).unwrap();
            assert_eq!(samples.len(), count as usize);
            assert_eq!(authenticator.calls(), count);
        }
    }

    #[test]
    fn test_simulated_latency_is_measured() {
        let (client, service) = principals();
        let authenticator = MockAuthenticator::new().with_latency(Duration::from_millis(20));
        let runner = BenchmarkRunner::new(3, Duration::ZERO);
        let samples = runner.run(&authenticator, &client, &service).unwrap();
        assert!(samples.iter().all(|&s| s >= Duration::from_millis(20)));
    }

    #[test]
    fn test_failure_aborts_immediately() {
        let (client, service) = principals();
        let authenticator = MockAuthenticator::new().failing_on(2);
        let runner = BenchmarkRunner::new(5, Duration::ZERO);
        let err = runner.run(&authenticator, &client, &service).unwrap_err();
        assert!(matches!(err, AuthError::Rejected { .. }));
        // Trials 3..5 never ran.
        assert_eq!(authenticator.calls(), 2);
    }

    #[test]
    fn test_failure_on_first_trial() {
        let (client, service) = principals();
        let authenticator = MockAuthenticator::new().failing_on(1);
        let runner = BenchmarkRunner::new(3, Duration::ZERO);
        assert!(runner.run(&authenticator, &client, &service).is_err());
        assert_eq!(authenticator.calls(), 1);
    }

    #[test]
    fn test_failure_on_last_trial() {
        let (client, service) = principals();
        let authenticator = MockAuthenticator::new().failing_on(4);
        let runner = BenchmarkRunner::new(4, Duration::ZERO);
        assert!(runner.run(&authenticator, &client, &service).is_err());
        assert_eq!(authenticator.calls(), 4);
    }

    #[test]
    fn test_pacing_applies_after_every_trial() {
        let (client, service) = principals();
        let interval = Duration::from_millis(10);
        let authenticator = MockAuthenticator::new();
        let runner = BenchmarkRunner::new(3, interval);

        let start = Instant::now();
        runner.run(&authenticator, &client, &service).unwrap();
        let elapsed = start.elapsed();

        // Three pacing sleeps, the one after the final trial included.
        assert!(elapsed >= interval * 3, "elapsed {:?}", elapsed);
    }
}
