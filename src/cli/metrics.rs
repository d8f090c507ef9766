//! Request counters for server mode

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Per-path and per-status request counters with response time bounds
#[derive(Debug)]
pub struct Metrics {
    started: Instant,
    counters: Mutex<Counters>,
}

#[derive(Debug, Default)]
struct Counters {
    total_requests: u64,
    total_errors: u64,
    by_status: BTreeMap<u16, u64>,
    by_path: BTreeMap<String, u64>,
    total_time: Duration,
    min_time: Option<Duration>,
    max_time: Duration,
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub uptime_seconds: f64,
    pub total_requests: u64,
    pub total_errors: u64,
    pub requests_by_status: BTreeMap<u16, u64>,
    pub requests_by_path: BTreeMap<String, u64>,
    pub avg_response_time_ns: u64,
    pub min_response_time_ns: u64,
    pub max_response_time_ns: u64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            counters: Mutex::new(Counters::default()),
        }
    }

    /// Count one finished request; statuses of 400 and above are errors
    pub fn record(&self, path: &str, status: u16, elapsed: Duration) {
        let mut counters = self.counters.lock().unwrap_or_else(PoisonError::into_inner);
        counters.total_requests += 1;
        if status >= 400 {
            counters.total_errors += 1;
        }
        *counters.by_status.entry(status).or_default() += 1;
        *counters.by_path.entry(path.to_string()).or_default() += 1;

        counters.total_time += elapsed;
        counters.max_time = counters.max_time.max(elapsed);
        counters.min_time = Some(counters.min_time.map_or(elapsed, |min| min.min(elapsed)));
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let counters = self.counters.lock().unwrap_or_else(PoisonError::into_inner);
        let average = match u32::try_from(counters.total_requests) {
            Ok(0) => Duration::ZERO,
            Ok(count) => counters.total_time / count,
            Err(_) => Duration::ZERO,
        };

        MetricsSnapshot {
            uptime_seconds: self.started.elapsed().as_secs_f64(),
            total_requests: counters.total_requests,
            total_errors: counters.total_errors,
            requests_by_status: counters.by_status.clone(),
            requests_by_path: counters.by_path.clone(),
            avg_response_time_ns: nanos(average),
            min_response_time_ns: nanos(counters.min_time.unwrap_or_default()),
            max_response_time_ns: nanos(counters.max_time),
        }
    }
}

fn nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Metrics::new().snapshot();
        assert_eq!(snapshot.total_requests, 0);
        assert_eq!(snapshot.avg_response_time_ns, 0);
        assert_eq!(snapshot.min_response_time_ns, 0);
        assert!(snapshot.requests_by_path.is_empty());
    }

    #[test]
    fn test_record_counts_paths_statuses_and_errors() {
        let metrics = Metrics::new();
        metrics.record("/health", 200, Duration::from_millis(2));
        metrics.record("/api/v1/stats/leagueleaders", 200, Duration::from_millis(10));
        metrics.record("/api/v1/stats/leagueleaders", 400, Duration::from_millis(6));
        metrics.record("/nope", 404, Duration::from_millis(1));

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.total_requests, 4);
        assert_eq!(snapshot.total_errors, 2);
        assert_eq!(snapshot.requests_by_status[&200], 2);
        assert_eq!(snapshot.requests_by_status[&404], 1);
        assert_eq!(snapshot.requests_by_path["/api/v1/stats/leagueleaders"], 2);
        assert_eq!(snapshot.min_response_time_ns, 1_000_000);
        assert_eq!(snapshot.max_response_time_ns, 10_000_000);
        assert_eq!(snapshot.avg_response_time_ns, 4_750_000);
    }

    #[test]
    fn test_snapshot_serializes_status_keys_as_strings() {
        let metrics = Metrics::new();
        metrics.record("/health", 200, Duration::from_millis(1));
        let json = serde_json::to_value(metrics.snapshot()).unwrap();
        assert_eq!(json["requests_by_status"]["200"], 1);
        assert_eq!(json["requests_by_path"]["/health"], 1);
    }
}
