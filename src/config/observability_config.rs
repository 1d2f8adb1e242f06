//! Observability configuration parsing from environment variables.
//!
//! This module handles loading metrics reporting configuration.

use anyhow::{Context, Result};
use std::env;

/// Observability environment configuration
#[derive(Debug, Clone)]
pub struct ObservabilityEnvConfig {
    pub enabled: bool,
    pub interval_seconds: u64,
}

impl Default for ObservabilityEnvConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_seconds: 60,
        }
    }
}

impl ObservabilityEnvConfig {
    pub fn from_env() -> Result<Self> {
        let interval_seconds = env::var("OBSERVABILITY_INTERVAL")
            .unwrap_or_else(|_| "60".to_string())
            .parse::<u64>()
            .context("Failed to parse OBSERVABILITY_INTERVAL")?;
        if interval_seconds == 0 {
            anyhow::bail!("OBSERVABILITY_INTERVAL must be at least 1 second");
        }

        Ok(Self {
            enabled: env::var("OBSERVABILITY_ENABLED")
                .unwrap_or_else(|_| "true".to_string())
                .parse::<bool>()
                .unwrap_or(true),
            interval_seconds,
        })
    }
}
