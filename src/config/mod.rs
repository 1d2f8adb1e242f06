//! Configuration module for Loan Predict.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Server, Artifacts, and Observability.

mod artifact_config;
mod observability_config;
mod server_config;

pub use artifact_config::ArtifactEnvConfig;
pub use observability_config::ObservabilityEnvConfig;
pub use server_config::ServerEnvConfig;

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Main application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerEnvConfig,
    pub artifacts: ArtifactEnvConfig,
    pub observability: ObservabilityEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerEnvConfig::from_env().context("Failed to load server config")?,
            artifacts: ArtifactEnvConfig::from_env(),
            observability: ObservabilityEnvConfig::from_env()
                .context("Failed to load observability config")?,
        })
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        model_path: Option<PathBuf>,
        preprocessing_path: Option<PathBuf>,
    ) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(path) = model_path {
            self.artifacts.model_path = path;
        }
        if let Some(path) = preprocessing_path {
            self.artifacts.preprocessing_path = path;
        }
        self
    }
}
