//! Push-based metrics reporter for Loan Predict
//!
//! Periodically outputs metrics as structured JSON to stdout.

use crate::domain::readiness::ReadinessState;
use crate::infrastructure::observability::metrics::Metrics;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Metrics snapshot for JSON output
#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub timestamp: String,
    pub uptime_seconds: u64,
    pub version: String,
    pub readiness: ReadinessSnapshot,
    pub predictions: PredictionSnapshot,
}

#[derive(Serialize)]
pub struct ReadinessSnapshot {
    pub model_loaded: bool,
    pub preprocessing_loaded: bool,
}

#[derive(Serialize)]
pub struct PredictionSnapshot {
    pub approved: u64,
    pub rejected: u64,
    pub failed: u64,
}

/// Push-based metrics reporter
///
/// Outputs metrics as structured JSON logs on a configurable interval.
pub struct MetricsReporter {
    metrics: Metrics,
    readiness: ReadinessState,
    start_time: Instant,
    interval: Duration,
}

impl MetricsReporter {
    pub fn new(metrics: Metrics, readiness: ReadinessState, interval_seconds: u64) -> Self {
        Self {
            metrics,
            readiness,
            start_time: Instant::now(),
            interval: Duration::from_secs(interval_seconds),
        }
    }

    /// Run the reporter in a loop, outputting metrics periodically
    pub async fn run(self) {
        info!(
            "MetricsReporter: Starting push-based metrics (interval: {:?})",
            self.interval
        );

        loop {
            tokio::time::sleep(self.interval).await;

            let snapshot = self.collect_snapshot();
            match serde_json::to_string(&snapshot) {
                Ok(json) => {
                    // Prefixed so log shippers can filter it
                    println!("METRICS_JSON:{}", json);
                    info!(
                        "Predictions: {} approved | {} rejected | {} failed | Uptime: {}s",
                        snapshot.predictions.approved,
                        snapshot.predictions.rejected,
                        snapshot.predictions.failed,
                        snapshot.uptime_seconds
                    );
                }
                Err(e) => warn!("Failed to serialize metrics: {}", e),
            }
        }
    }

    /// Collect current metrics snapshot
    fn collect_snapshot(&self) -> MetricsSnapshot {
        let uptime = self.start_time.elapsed().as_secs();
        self.metrics.uptime_seconds.set(uptime as f64);

        MetricsSnapshot {
            timestamp: chrono::Utc::now().to_rfc3339(),
            uptime_seconds: uptime,
            version: env!("CARGO_PKG_VERSION").to_string(),
            readiness: ReadinessSnapshot {
                model_loaded: self.readiness.model_loaded(),
                preprocessing_loaded: self.readiness.preprocessing_loaded(),
            },
            predictions: PredictionSnapshot {
                approved: self.metrics.prediction_count("approved"),
                rejected: self.metrics.prediction_count("rejected"),
                failed: self.metrics.prediction_count("error"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn test_metrics_snapshot_collection() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        metrics.inc_prediction("rejected");
        let reporter =
            MetricsReporter::new(metrics, ReadinessState::new(true, true, Local::now()), 60);

        let snapshot = reporter.collect_snapshot();

        assert_eq!(snapshot.predictions.rejected, 1);
        assert_eq!(snapshot.predictions.approved, 0);
        assert!(snapshot.readiness.model_loaded);
        assert!(!snapshot.timestamp.is_empty());
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = MetricsSnapshot {
            timestamp: "2026-01-10T10:00:00Z".to_string(),
            uptime_seconds: 3600,
            version: "1.0.0".to_string(),
            readiness: ReadinessSnapshot {
                model_loaded: true,
                preprocessing_loaded: false,
            },
            predictions: PredictionSnapshot {
                approved: 12,
                rejected: 30,
                failed: 2,
            },
        };

        let json = serde_json::to_string(&snapshot).expect("Failed to serialize");
        assert!(json.contains("\"preprocessing_loaded\":false"));
        assert!(json.contains("\"rejected\":30"));
    }
}
