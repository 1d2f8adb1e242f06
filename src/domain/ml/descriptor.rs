use super::ports::FeatureLayout;
use crate::domain::errors::ArtifactError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Preprocessing metadata exported by the training process.
///
/// Only the ordered feature names are consumed; any other keys in the
/// artifact are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreprocessingDescriptor {
    feature_names: Vec<String>,
}

impl PreprocessingDescriptor {
    pub fn new(feature_names: Vec<String>) -> Result<Self, ArtifactError> {
        let descriptor = Self { feature_names };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// A layout must be non-empty and name every column exactly once.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.is_empty() {
            return Err(ArtifactError::InvalidDescriptor {
                reason: "feature_names is empty".to_string(),
            });
        }

        let mut seen = HashSet::with_capacity(self.feature_names.len());
        for name in &self.feature_names {
            if !seen.insert(name.as_str()) {
                return Err(ArtifactError::InvalidDescriptor {
                    reason: format!("duplicate feature name '{}'", name),
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.feature_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feature_names.is_empty()
    }
}

impl FeatureLayout for PreprocessingDescriptor {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }
}
