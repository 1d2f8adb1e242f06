use super::logistic_classifier::LogisticClassifier;
use super::smartcore_classifier::{ApprovalForest, SmartCoreClassifier};
use crate::config::ArtifactEnvConfig;
use crate::domain::errors::ArtifactError;
use crate::domain::ml::{FeatureLayout, LoanClassifier, PreprocessingDescriptor};
use crate::domain::readiness::ReadinessState;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Serialized forest plus the input width it was fitted on
#[derive(Serialize, Deserialize)]
pub struct ForestArtifact {
    pub n_features: usize,
    pub forest: ApprovalForest,
}

/// On-disk model envelope, tagged by model family
#[derive(Deserialize)]
#[serde(tag = "kind", content = "model", rename_all = "snake_case")]
pub enum ModelArtifact {
    Logistic(LogisticClassifier),
    RandomForest(ForestArtifact),
}

impl ModelArtifact {
    pub fn into_classifier(self) -> Result<Arc<dyn LoanClassifier>, ArtifactError> {
        match self {
            ModelArtifact::Logistic(model) => {
                model
                    .validate()
                    .map_err(|reason| ArtifactError::InvalidModel { reason })?;
                Ok(Arc::new(model))
            }
            ModelArtifact::RandomForest(ForestArtifact { n_features, forest }) => {
                if n_features == 0 {
                    return Err(ArtifactError::InvalidModel {
                        reason: "random forest must record a non-zero n_features".to_string(),
                    });
                }
                Ok(Arc::new(SmartCoreClassifier::new(forest, n_features)))
            }
        }
    }
}

/// Output of the startup load: whatever artifacts succeeded, plus readiness.
pub struct LoadedArtifacts {
    pub model: Option<Arc<dyn LoanClassifier>>,
    pub layout: Option<Arc<dyn FeatureLayout>>,
    pub readiness: ReadinessState,
}

impl LoadedArtifacts {
    /// Readiness is derived from which artifacts are present, stamped now.
    pub fn new(
        model: Option<Arc<dyn LoanClassifier>>,
        layout: Option<Arc<dyn FeatureLayout>>,
    ) -> Self {
        let readiness = ReadinessState::new(model.is_some(), layout.is_some(), Local::now());
        Self {
            model,
            layout,
            readiness,
        }
    }
}

/// Loads the model and preprocessing descriptor from fixed paths
pub struct ArtifactLoader {
    model_path: PathBuf,
    preprocessing_path: PathBuf,
}

impl ArtifactLoader {
    pub fn new(model_path: PathBuf, preprocessing_path: PathBuf) -> Self {
        Self {
            model_path,
            preprocessing_path,
        }
    }

    pub fn from_config(config: &ArtifactEnvConfig) -> Self {
        Self::new(config.model_path.clone(), config.preprocessing_path.clone())
    }

    /// Loads both artifacts independently. Failures are logged and leave the
    /// matching artifact unset; this never aborts startup.
    pub fn load(&self) -> LoadedArtifacts {
        let model = match load_model(&self.model_path) {
            Ok(model) => {
                info!(
                    "Model loaded successfully from {:?} ({})",
                    self.model_path,
                    model.name()
                );
                Some(model)
            }
            Err(e) => {
                error!("Error loading model: {}", e);
                None
            }
        };

        let layout = match load_descriptor(&self.preprocessing_path) {
            Ok(descriptor) => {
                info!(
                    "Preprocessing info loaded successfully from {:?} ({} features)",
                    self.preprocessing_path,
                    descriptor.len()
                );
                Some(Arc::new(descriptor) as Arc<dyn FeatureLayout>)
            }
            Err(e) => {
                error!("Error loading preprocessing info: {}", e);
                None
            }
        };

        if let (Some(model), Some(layout)) = (&model, &layout) {
            let width = layout.feature_names().len();
            if let Some(expected) = model.n_features().filter(|&n| n != width) {
                warn!(
                    "Model expects {} features but preprocessing info lists {}; predictions will fail",
                    expected, width
                );
            }
        }

        LoadedArtifacts::new(model, layout)
    }
}

pub fn load_model(path: &Path) -> Result<Arc<dyn LoanClassifier>, ArtifactError> {
    let bytes = read_artifact(path)?;
    let artifact: ModelArtifact =
        serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Format {
            path: path.to_path_buf(),
            source,
        })?;
    artifact.into_classifier()
}

pub fn load_descriptor(path: &Path) -> Result<PreprocessingDescriptor, ArtifactError> {
    let bytes = read_artifact(path)?;
    let descriptor: PreprocessingDescriptor =
        serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Format {
            path: path.to_path_buf(),
            source,
        })?;
    descriptor.validate()?;
    Ok(descriptor)
}

fn read_artifact(path: &Path) -> Result<Vec<u8>, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::NotFound {
            path: path.to_path_buf(),
        });
    }
    fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })
}
