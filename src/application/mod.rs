// Artifact loading and concrete model families
pub mod ml;

// Health and prediction use cases
pub mod prediction_service;
