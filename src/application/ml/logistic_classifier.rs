use crate::domain::errors::ClassifierError;
use crate::domain::ml::{ClassProbabilities, FeatureVector, LoanClassifier};
use serde::{Deserialize, Serialize};

fn default_threshold() -> f64 {
    0.5
}

/// Logistic regression exported as plain weights.
/// Coefficients are ordered like the preprocessing descriptor's feature names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticClassifier {
    intercept: f64,
    coefficients: Vec<f64>,
    #[serde(default = "default_threshold")]
    threshold: f64,
}

impl LogisticClassifier {
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> Self {
        Self {
            intercept,
            coefficients,
            threshold: default_threshold(),
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Checks that the weights describe a usable model.
    pub fn validate(&self) -> Result<(), String> {
        if self.coefficients.is_empty() {
            return Err("logistic model has no coefficients".to_string());
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err("logistic model has non-finite weights".to_string());
        }
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(format!(
                "decision threshold {} must lie strictly between 0 and 1",
                self.threshold
            ));
        }
        Ok(())
    }

    fn approval_probability(&self, features: &FeatureVector) -> Result<f64, ClassifierError> {
        if features.len() != self.coefficients.len() {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }

        let logit = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features.as_slice())
                .map(|(w, x)| w * x)
                .sum::<f64>();

        let probability = 1.0 / (1.0 + (-logit).exp());
        if probability.is_nan() {
            return Err(ClassifierError::InvalidProbability(probability));
        }
        Ok(probability)
    }
}

impl LoanClassifier for LogisticClassifier {
    fn classify(&self, features: &FeatureVector) -> Result<bool, ClassifierError> {
        Ok(self.approval_probability(features)? >= self.threshold)
    }

    fn classify_with_probability(
        &self,
        features: &FeatureVector,
    ) -> Result<ClassProbabilities, ClassifierError> {
        ClassProbabilities::from_approved(self.approval_probability(features)?)
    }

    fn name(&self) -> &str {
        "Logistic Regression"
    }

    fn n_features(&self) -> Option<usize> {
        Some(self.coefficients.len())
    }
}
