use super::feature_registry::FeatureVector;
use crate::domain::errors::ClassifierError;

/// Probability distribution over the two loan outcomes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassProbabilities {
    pub rejected: f64,
    pub approved: f64,
}

impl ClassProbabilities {
    /// Builds the distribution from the approved-class mass.
    /// Rejects values that are not a probability.
    pub fn from_approved(approved: f64) -> Result<Self, ClassifierError> {
        if !approved.is_finite() || !(0.0..=1.0).contains(&approved) {
            return Err(ClassifierError::InvalidProbability(approved));
        }
        Ok(Self {
            rejected: 1.0 - approved,
            approved,
        })
    }
}

/// Interface for trained loan-approval models
pub trait LoanClassifier: Send + Sync {
    /// Predicted label for a single row: true means approved
    fn classify(&self, features: &FeatureVector) -> Result<bool, ClassifierError>;

    /// Class distribution for a single row
    fn classify_with_probability(
        &self,
        features: &FeatureVector,
    ) -> Result<ClassProbabilities, ClassifierError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Input width the model was trained on, when the model records it
    fn n_features(&self) -> Option<usize> {
        None
    }
}

/// Column layout the model was trained on
pub trait FeatureLayout: Send + Sync {
    /// Ordered feature names; defines width and order of every feature vector.
    fn feature_names(&self) -> &[String];
}
