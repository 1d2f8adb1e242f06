//! Loan Predict Server - HTTP front for the loan approval model
//!
//! Loads the model and preprocessing artifacts once at startup, then serves
//! `/`, `/health` and `/predict`. A missing or corrupt artifact does not stop
//! the server; it starts degraded and reports itself unhealthy.
//!
//! # Usage
//! ```sh
//! MODEL_PATH=loan_model.json PORT=5000 cargo run --bin server
//! ```
//!
//! # Environment Variables
//! - `HOST` / `PORT` - Listen address (default: 0.0.0.0:5000)
//! - `MODEL_PATH` - Model artifact (default: loan_model.json)
//! - `PREPROCESSING_PATH` - Preprocessing descriptor (default: preprocessing_info.json)
//! - `CORS_ENABLED` / `REQUEST_TRACING` - HTTP middleware toggles (default: true)
//! - `OBSERVABILITY_ENABLED` - Enable metrics reporting (default: true)
//! - `OBSERVABILITY_INTERVAL` - Interval in seconds between metric outputs (default: 60)

use anyhow::{Context, Result};
use clap::Parser;
use loan_predict::application::ml::ArtifactLoader;
use loan_predict::application::prediction_service::PredictionService;
use loan_predict::config::Config;
use loan_predict::infrastructure::observability::{Metrics, MetricsReporter};
use loan_predict::interfaces::http::ApiServer;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level, info, warn};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Path to the model artifact (overrides MODEL_PATH)
    #[arg(long)]
    model_path: Option<PathBuf>,

    /// Path to the preprocessing descriptor (overrides PREPROCESSING_PATH)
    #[arg(long)]
    preprocessing_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    let args = Args::parse();

    info!("Loan Predict Server {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?.with_overrides(
        args.host,
        args.port,
        args.model_path,
        args.preprocessing_path,
    );
    info!(
        "Configuration loaded: Listen={}:{}, Model={:?}, Preprocessing={:?}",
        config.server.host,
        config.server.port,
        config.artifacts.model_path,
        config.artifacts.preprocessing_path
    );

    let artifacts = ArtifactLoader::from_config(&config.artifacts).load();
    let readiness = artifacts.readiness;
    if !readiness.is_ready() {
        warn!(
            "Starting DEGRADED: model_loaded={}, preprocessing_loaded={}",
            readiness.model_loaded(),
            readiness.preprocessing_loaded()
        );
    }

    let metrics = Metrics::new().context("Failed to create metrics registry")?;
    let service = Arc::new(PredictionService::new(artifacts).with_metrics(metrics.clone()));

    if config.observability.enabled {
        let reporter =
            MetricsReporter::new(metrics, readiness, config.observability.interval_seconds);
        tokio::spawn(async move {
            reporter.run().await;
        });
        info!(
            "Metrics reporter started (interval: {}s)",
            config.observability.interval_seconds
        );
    } else {
        info!("Metrics reporting disabled.");
    }

    let server = ApiServer::new(config.server.clone(), service);
    server.run().await?;

    info!("Server stopped.");
    Ok(())
}
