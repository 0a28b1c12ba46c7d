//! Latency aggregation over a completed trial sequence.
//!
//! The aggregate is computed once, after all trials have finished; the
//! sample slice is never mutated here. The mean is nanosecond-exact
//! integer division, so sub-second precision survives into the threshold
//! comparison.

use serde::Serialize;
use std::time::Duration;

/// Aggregate statistics of one benchmark run.
///
/// Invariants: `min <= mean <= max` and `sum = mean * count` up to
/// nanosecond truncation of the division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LatencyStats {
    pub count: usize,
    #[serde(with = "secs")]
    pub sum: Duration,
    #[serde(with = "secs")]
    pub min: Duration,
    #[serde(with = "secs")]
    pub max: Duration,
    #[serde(with = "secs")]
    pub mean: Duration,
}

impl LatencyStats {
    /// Reduce a trial sequence into its aggregate.
    ///
    /// Returns `None` for an empty slice. The executor guarantees at least
    /// one sample, so callers treat `None` as unreachable rather than as
    /// an empty-aggregate case.
    pub fn from_samples(samples: &[Duration]) -> Option<Self> {
        let (&first, rest) = samples.split_first()?;

        let mut sum = first;
        let mut min = first;
        let mut max = first;
        for &sample in rest {
            sum += sample;
            if sample < min {
                min = sample;
            }
            if sample > max {
                max = sample;
            }
        }

        let count = samples.len();
        let mean = sum / count as u32;

        Some(Self {
            count,
            sum,
            min,
            max,
            mean,
        })
    }
}

/// Serialize a `Duration` as floating-point seconds.
pub(crate) mod secs {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(duration.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn millis(values: &[u64]) -> Vec<Duration> {
        values.iter().map(|&ms| Duration::from_millis(ms)).collect()
    }

    #[test]
    fn test_single_sample() {
        let stats = LatencyStats::from_samples(&millis(&[250])).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.sum, Duration::from_millis(250));
        assert_eq!(stats.min, Duration::from_millis(250));
        assert_eq!(stats.max, Duration::from_millis(250));
        assert_eq!(stats.mean, Duration::from_millis(250));
    }

    #[test]
    fn test_three_samples() {
        let stats = LatencyStats::from_samples(&millis(&[500, 600, 400])).unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.sum, Duration::from_millis(1500));
        assert_eq!(stats.min, Duration::from_millis(400));
        assert_eq!(stats.max, Duration::from_millis(600));
        assert_eq!(stats.mean, Duration::from_millis(500));
    }

    #[test]
    fn test_empty_is_none() {
        assert!(LatencyStats::from_samples(&[]).is_none());
    }

    #[test]
    fn test_identical_samples() {
        let stats = LatencyStats::from_samples(&millis(&[123, 123, 123, 123])).unwrap();
        assert_eq!(stats.min, stats.max);
        assert_eq!(stats.mean, Duration::from_millis(123));
    }

    #[test]
    fn test_mean_keeps_sub_millisecond_precision() {
        // (1ms + 2ms) / 2 = 1.5ms, not truncated to whole milliseconds.
        let stats = LatencyStats::from_samples(&millis(&[1, 2])).unwrap();
        assert_eq!(stats.mean, Duration::from_micros(1500));
    }

    #[test]
    fn test_zero_duration_samples() {
        let stats = LatencyStats::from_samples(&millis(&[0, 0])).unwrap();
        assert_eq!(stats.mean, Duration::ZERO);
        assert_eq!(stats.sum, Duration::ZERO);
    }

    #[test]
    fn test_order_does_not_matter() {
        let a = LatencyStats::from_samples(&millis(&[100, 900, 500])).unwrap();
        let b = LatencyStats::from_samples(&millis(&[900, 500, 100])).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serializes_as_seconds() {
        let stats = LatencyStats::from_samples(&millis(&[500, 600, 400])).unwrap();
        let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&stats).unwrap())
            .unwrap();
        assert_eq!(json["count"], 3);
        assert!((json["mean"].as_f64().unwrap() - 0.5).abs() < 1e-9);
        assert!((json["min"].as_f64().unwrap() - 0.4).abs() < 1e-9);
        assert!((json["max"].as_f64().unwrap() - 0.6).abs() < 1e-9);
    }

    proptest! {
        // min <= mean <= max for every non-empty sequence.
        #[test]
        fn test_mean_bounded_by_extremes(
            samples_ms in prop::collection::vec(0u64..120_000, 1..64)
        ) {
            let stats = LatencyStats::from_samples(&millis(&samples_ms)).unwrap();
            prop_assert!(stats.min <= stats.mean);
            prop_assert!(stats.mean <= stats.max);
        }

        // sum = mean * count up to nanosecond truncation of the division.
        #[test]
        fn test_sum_matches_mean_times_count(
            samples_ms in prop::collection::vec(0u64..120_000, 1..64)
        ) {
            let stats = LatencyStats::from_samples(&millis(&samples_ms)).unwrap();
            let rebuilt = stats.mean * stats.count as u32;
            let slack = Duration::from_nanos(stats.count as u64);
            prop_assert!(stats.sum >= rebuilt);
            prop_assert!(stats.sum - rebuilt < slack.max(Duration::from_nanos(1)));
        }

        // count always equals the sequence length.
        #[test]
        fn test_count_is_length(
            samples_ms in prop::collection::vec(0u64..120_000, 1..64)
        ) {
            let samples = millis(&samples_ms);
            let stats = LatencyStats::from_samples(&samples).unwrap();
            prop_assert_eq!(stats.count, samples.len());
        }
    }
}
