//! Artifact location configuration parsing from environment variables.

use std::env;
use std::path::PathBuf;

/// Where the trained model and preprocessing descriptor live on disk
#[derive(Debug, Clone)]
pub struct ArtifactEnvConfig {
    pub model_path: PathBuf,
    pub preprocessing_path: PathBuf,
}

impl Default for ArtifactEnvConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("loan_model.json"),
            preprocessing_path: PathBuf::from("preprocessing_info.json"),
        }
    }
}

impl ArtifactEnvConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            model_path: env::var("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
            preprocessing_path: env::var("PREPROCESSING_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.preprocessing_path),
        }
    }
}
