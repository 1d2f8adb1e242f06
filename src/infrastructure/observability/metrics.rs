//! Prometheus metrics definitions for Loan Predict
//!
//! All metrics use the `loan_predict_` prefix.

use crate::domain::readiness::ReadinessState;
use prometheus::{CounterVec, Gauge, Histogram, HistogramOpts, Opts, Registry, TextEncoder};
use std::sync::Arc;

/// Prometheus metrics for the prediction service
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    /// Predictions by outcome (approved, rejected, error)
    pub predictions_total: CounterVec,
    /// Time spent aligning features and scoring, in seconds
    pub prediction_latency_seconds: Histogram,
    /// Model artifact status (0=missing, 1=loaded)
    pub model_loaded: Gauge,
    /// Preprocessing artifact status (0=missing, 1=loaded)
    pub preprocessing_loaded: Gauge,
    /// Uptime in seconds
    pub uptime_seconds: Gauge,
}

impl Metrics {
    /// Create a new Metrics instance with all gauges and counters registered
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let predictions_total = CounterVec::new(
            Opts::new(
                "loan_predict_predictions_total",
                "Total prediction requests by outcome",
            ),
            &["outcome"],
        )?;
        registry.register(Box::new(predictions_total.clone()))?;

        let prediction_latency_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "loan_predict_prediction_latency_seconds",
                "Feature alignment and inference latency in seconds",
            )
            .buckets(vec![
                0.0001, 0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.5, 1.0,
            ]),
        )?;
        registry.register(Box::new(prediction_latency_seconds.clone()))?;

        let model_loaded = Gauge::with_opts(Opts::new(
            "loan_predict_model_loaded",
            "Model artifact status (0=missing, 1=loaded)",
        ))?;
        registry.register(Box::new(model_loaded.clone()))?;

        let preprocessing_loaded = Gauge::with_opts(Opts::new(
            "loan_predict_preprocessing_loaded",
            "Preprocessing artifact status (0=missing, 1=loaded)",
        ))?;
        registry.register(Box::new(preprocessing_loaded.clone()))?;

        let uptime_seconds = Gauge::with_opts(Opts::new(
            "loan_predict_uptime_seconds",
            "Server uptime in seconds",
        ))?;
        registry.register(Box::new(uptime_seconds.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            predictions_total,
            prediction_latency_seconds,
            model_loaded,
            preprocessing_loaded,
            uptime_seconds,
        })
    }

    /// Render all metrics in Prometheus text format
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder
            .encode_to_string(&metric_families)
            .unwrap_or_default()
    }

    /// Increment prediction counter
    pub fn inc_prediction(&self, outcome: &str) {
        self.predictions_total.with_label_values(&[outcome]).inc();
    }

    pub fn prediction_count(&self, outcome: &str) -> u64 {
        self.predictions_total.with_label_values(&[outcome]).get() as u64
    }

    pub fn observe_prediction_latency(&self, seconds: f64) {
        self.prediction_latency_seconds.observe(seconds);
    }

    pub fn set_readiness(&self, readiness: &ReadinessState) {
        self.model_loaded
            .set(if readiness.model_loaded() { 1.0 } else { 0.0 });
        self.preprocessing_loaded
            .set(if readiness.preprocessing_loaded() { 1.0 } else { 0.0 });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        metrics.inc_prediction("approved");
        metrics.observe_prediction_latency(0.002);

        let output = metrics.render();
        assert!(output.contains("loan_predict_predictions_total"));
        assert!(output.contains("loan_predict_prediction_latency_seconds"));
    }

    #[test]
    fn test_prediction_counter_by_outcome() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        metrics.inc_prediction("approved");
        metrics.inc_prediction("approved");
        metrics.inc_prediction("rejected");

        assert_eq!(metrics.prediction_count("approved"), 2);
        assert_eq!(metrics.prediction_count("rejected"), 1);
        assert_eq!(metrics.prediction_count("error"), 0);
    }

    #[test]
    fn test_readiness_gauges() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        metrics.set_readiness(&ReadinessState::new(true, false, Local::now()));

        assert_eq!(metrics.model_loaded.get(), 1.0);
        assert_eq!(metrics.preprocessing_loaded.get(), 0.0);
    }
}
