use crate::application::ml::artifact_loader::LoadedArtifacts;
use crate::domain::errors::PredictionError;
use crate::domain::ml::feature_registry::{align_features, validate_required_fields};
use crate::domain::ml::{FeatureLayout, LoanClassifier};
use crate::domain::readiness::ReadinessState;
use crate::domain::types::{HealthReport, PredictionResponse};
use crate::infrastructure::observability::Metrics;
use chrono::{DateTime, Local};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Serves health and loan predictions from the artifacts loaded at startup.
///
/// Everything here is immutable after construction, so one instance is shared
/// by all request handlers behind an `Arc`.
pub struct PredictionService {
    model: Option<Arc<dyn LoanClassifier>>,
    layout: Option<Arc<dyn FeatureLayout>>,
    readiness: ReadinessState,
    metrics: Option<Metrics>,
}

impl PredictionService {
    pub fn new(artifacts: LoadedArtifacts) -> Self {
        Self {
            model: artifacts.model,
            layout: artifacts.layout,
            readiness: artifacts.readiness,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        metrics.set_readiness(&self.readiness);
        self.metrics = Some(metrics);
        self
    }

    pub fn readiness(&self) -> &ReadinessState {
        &self.readiness
    }

    pub fn health(&self) -> HealthReport {
        self.readiness.to_health_report()
    }

    /// Predicts from a raw request body. Readiness is checked before the body is parsed.
    pub fn predict_body(&self, body: &[u8]) -> Result<PredictionResponse, PredictionError> {
        self.ready_artifacts()?;

        let input: Value = serde_json::from_slice(body).map_err(|e| {
            self.record_failure();
            PredictionError::InvalidPayload {
                reason: format!("Invalid JSON body: {}", e),
            }
        })?;
        self.predict(&input)
    }

    pub fn predict(&self, input: &Value) -> Result<PredictionResponse, PredictionError> {
        self.predict_at(input, Local::now())
    }

    /// Same as `predict`, with the response timestamp supplied by the caller.
    pub fn predict_at(
        &self,
        input: &Value,
        at: DateTime<Local>,
    ) -> Result<PredictionResponse, PredictionError> {
        let (model, layout) = self.ready_artifacts()?;
        let started = Instant::now();

        let result = Self::score(model, layout, input, at);

        if let Some(metrics) = &self.metrics {
            metrics.observe_prediction_latency(started.elapsed().as_secs_f64());
        }
        match &result {
            Ok(response) => {
                debug!(
                    "Prediction: {} (p={:.4})",
                    response.status.as_str(),
                    response.probability
                );
                if let Some(metrics) = &self.metrics {
                    metrics.inc_prediction(response.status.as_str());
                }
            }
            Err(e) => {
                warn!("Prediction rejected: {}", e);
                self.record_failure();
            }
        }
        result
    }

    fn score(
        model: &dyn LoanClassifier,
        layout: &dyn FeatureLayout,
        input: &Value,
        at: DateTime<Local>,
    ) -> Result<PredictionResponse, PredictionError> {
        let fields = input
            .as_object()
            .ok_or_else(|| PredictionError::InvalidPayload {
                reason: "Request body must be a JSON object".to_string(),
            })?;

        validate_required_fields(fields)?;
        let features = align_features(layout, fields)?;

        let approved = model.classify(&features)?;
        let probabilities = model.classify_with_probability(&features)?;

        Ok(PredictionResponse::new(approved, probabilities.approved, at))
    }

    fn ready_artifacts(&self) -> Result<(&dyn LoanClassifier, &dyn FeatureLayout), PredictionError> {
        if !self.readiness.is_ready() {
            return Err(PredictionError::NotReady);
        }
        match (&self.model, &self.layout) {
            (Some(model), Some(layout)) => Ok((model.as_ref(), layout.as_ref())),
            _ => Err(PredictionError::NotReady),
        }
    }

    fn record_failure(&self) {
        if let Some(metrics) = &self.metrics {
            metrics.inc_prediction("error");
        }
    }
}
