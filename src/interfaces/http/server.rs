//! HTTP server lifecycle

use super::routes::{ApiState, create_router};
use crate::application::prediction_service::PredictionService;
use crate::config::ServerEnvConfig;
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// HTTP server exposing the prediction service
pub struct ApiServer {
    config: ServerEnvConfig,
    state: ApiState,
    shutdown: Arc<Notify>,
}

impl ApiServer {
    pub fn new(config: ServerEnvConfig, service: Arc<PredictionService>) -> Self {
        Self {
            config,
            state: ApiState::new(service),
            shutdown: Arc::new(Notify::new()),
        }
    }

    /// Build the router with all middleware
    pub fn build_router(&self) -> Router {
        let mut router = create_router(self.state.clone());

        if self.config.cors_enabled {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router = router.layer(cors);
        }

        if self.config.request_tracing {
            router = router.layer(TraceLayer::new_for_http());
        }

        router
    }

    /// Serve until Ctrl+C or `shutdown` is called
    pub async fn run(&self) -> Result<()> {
        let addr = self.config.socket_addr()?;
        let router = self.build_router();

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind to {}", addr))?;

        info!("Health check available at: http://{}/health", addr);
        info!("Prediction endpoint: http://{}/predict", addr);
        info!("Homepage: http://{}/", addr);

        let shutdown = self.shutdown.clone();
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown.notified() => {}
                    _ = tokio::signal::ctrl_c() => {
                        info!("Shutdown signal received. Exiting...");
                    }
                }
            })
            .await
            .context("HTTP server error")?;

        Ok(())
    }

    pub fn shutdown(&self) {
        info!("Shutting down HTTP server");
        self.shutdown.notify_one();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ml::LoadedArtifacts;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    fn degraded_service() -> Arc<PredictionService> {
        Arc::new(PredictionService::new(LoadedArtifacts::new(None, None)))
    }

    #[tokio::test]
    async fn test_cors_headers_present_when_enabled() {
        let server = ApiServer::new(ServerEnvConfig::default(), degraded_service());
        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();

        let response = server.build_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }

    #[tokio::test]
    async fn test_cors_can_be_disabled() {
        let config = ServerEnvConfig {
            cors_enabled: false,
            ..Default::default()
        };
        let server = ApiServer::new(config, degraded_service());
        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();

        let response = server.build_router().oneshot(request).await.unwrap();
        assert!(
            !response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }

    #[tokio::test]
    async fn test_run_stops_on_shutdown() {
        let config = ServerEnvConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            ..Default::default()
        };
        let server = Arc::new(ApiServer::new(config, degraded_service()));

        let runner = server.clone();
        let handle = tokio::spawn(async move { runner.run().await });

        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        server.shutdown();

        let result = tokio::time::timeout(std::time::Duration::from_secs(5), handle)
            .await
            .expect("server did not stop")
            .unwrap();
        assert!(result.is_ok());
    }
}
