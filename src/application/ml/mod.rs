pub mod artifact_loader;
pub mod logistic_classifier;
pub mod smartcore_classifier;

pub use artifact_loader::{ArtifactLoader, LoadedArtifacts};
