use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a model or preprocessing artifact at startup.
/// These never escape startup: the loader turns them into a degraded readiness state.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Artifact not found at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt artifact {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid preprocessing descriptor: {reason}")]
    InvalidDescriptor { reason: String },

    #[error("Invalid model: {reason}")]
    InvalidModel { reason: String },
}

/// Errors raised by a classifier while scoring a single feature row
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClassifierError {
    #[error("X has {actual} features, but the model is expecting {expected} features as input")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Matrix creation failed: {0}")]
    Matrix(String),

    #[error("Prediction failed: {0}")]
    Prediction(String),

    #[error("Model returned no prediction")]
    EmptyOutput,

    #[error("Model returned an invalid probability: {0}")]
    InvalidProbability(f64),
}

/// Errors surfaced at the prediction request boundary
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PredictionError {
    #[error("Model or preprocessing not loaded")]
    NotReady,

    #[error("Missing field: {field}")]
    MissingField { field: String },

    #[error("{reason}")]
    InvalidPayload { reason: String },

    #[error("{reason}")]
    Inference { reason: String },
}

impl PredictionError {
    /// True when the caller is at fault (HTTP 400); false for server-side readiness failures.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, PredictionError::NotReady)
    }
}

impl From<ClassifierError> for PredictionError {
    fn from(err: ClassifierError) -> Self {
        PredictionError::Inference {
            reason: err.to_string(),
        }
    }
}
