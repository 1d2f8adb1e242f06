//! HTTP route handlers

use crate::application::prediction_service::PredictionService;
use crate::domain::errors::PredictionError;
use crate::domain::types::{ErrorBody, HealthReport, PredictionResponse};
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use std::sync::Arc;

const INDEX_HTML: &str = include_str!("index.html");

/// Shared application state
#[derive(Clone)]
pub struct ApiState {
    service: Arc<PredictionService>,
}

impl ApiState {
    pub fn new(service: Arc<PredictionService>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &PredictionService {
        &self.service
    }
}

/// Create the router with all routes
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .route("/predict", post(predict_handler))
        .with_state(state)
}

async fn home_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// 200 only when both artifacts loaded; the body is the same either way.
async fn health_handler(State(state): State<ApiState>) -> (StatusCode, Json<HealthReport>) {
    let report = state.service().health();
    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(report))
}

/// The body is taken raw so malformed JSON still gets a JSON error body.
async fn predict_handler(
    State(state): State<ApiState>,
    body: Bytes,
) -> Result<Json<PredictionResponse>, ApiErrorResponse> {
    state
        .service()
        .predict_body(&body)
        .map(Json)
        .map_err(ApiErrorResponse::from)
}

/// Wrapper for converting prediction errors into HTTP responses
#[derive(Debug)]
pub struct ApiErrorResponse(PredictionError);

impl From<PredictionError> for ApiErrorResponse {
    fn from(err: PredictionError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = Json(ErrorBody {
            error: self.0.to_string(),
        });

        (status, body).into_response()
    }
}
