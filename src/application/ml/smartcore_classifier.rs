use crate::domain::errors::ClassifierError;
use crate::domain::ml::{ClassProbabilities, FeatureVector, LoanClassifier};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;

pub type ApprovalForest = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Probability forest fitted on 0/1 approval labels.
///
/// Each tree predicts the approved share of its leaf, so the forest output is
/// the approved-class probability. The label is that probability at 0.5.
/// The forest does not record its training width, so it is stored alongside.
pub struct SmartCoreClassifier {
    forest: ApprovalForest,
    n_features: usize,
}

impl SmartCoreClassifier {
    pub fn new(forest: ApprovalForest, n_features: usize) -> Self {
        Self { forest, n_features }
    }

    fn approval_probability(&self, features: &FeatureVector) -> Result<f64, ClassifierError> {
        if features.len() != self.n_features {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.n_features,
                actual: features.len(),
            });
        }

        let input_matrix = DenseMatrix::from_2d_vec(&vec![features.to_vec()])
            .map_err(|e| ClassifierError::Matrix(e.to_string()))?;

        let predictions = self
            .forest
            .predict(&input_matrix)
            .map_err(|e| ClassifierError::Prediction(e.to_string()))?;

        let raw = *predictions.first().ok_or(ClassifierError::EmptyOutput)?;
        if !raw.is_finite() {
            return Err(ClassifierError::InvalidProbability(raw));
        }
        Ok(raw.clamp(0.0, 1.0))
    }
}

impl LoanClassifier for SmartCoreClassifier {
    fn classify(&self, features: &FeatureVector) -> Result<bool, ClassifierError> {
        Ok(self.approval_probability(features)? >= 0.5)
    }

    fn classify_with_probability(
        &self,
        features: &FeatureVector,
    ) -> Result<ClassProbabilities, ClassifierError> {
        ClassProbabilities::from_approved(self.approval_probability(features)?)
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }

    fn n_features(&self) -> Option<usize> {
        Some(self.n_features)
    }
}
