//! HTTP transport: a thin wrapper that exposes the engine over axum
//!
//! `GET /` reports liveness, `GET /health` reports diagnostics, and
//! `POST /predict` runs one evaluation. The engine and its classifier are
//! constructed once at startup and shared read-only across requests.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;

use crate::classify::CentroidModel;
use crate::config::BandmapConfig;
use crate::core::{AttemptRequest, EngineError, ResultRecord};
use crate::engine::Engine;

pub struct ServeOptions {
    pub model: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Clone)]
pub struct AppState {
    engine: Arc<Engine>,
    started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(engine: Arc<Engine>) -> Self {
        Self {
            engine,
            started_at: Utc::now(),
        }
    }
}

pub fn run_server(options: ServeOptions) -> Result<()> {
    let settings = BandmapConfig::load_or_default(options.config.as_deref())?;

    let model_path = options.model.unwrap_or_else(|| settings.model.path.clone());
    let classifier = Arc::new(CentroidModel::from_path(&model_path)?);
    info!("loaded model artifact from {}", model_path.display());

    let engine = Arc::new(Engine::new(classifier, settings.engine));
    let state = AppState::new(engine);
    let app = build_router(state);

    let host = options.host.unwrap_or(settings.server.host);
    let port = options.port.unwrap_or(settings.server.port);
    let addr = format!("{host}:{port}");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!("listening on http://{addr}");
        info!("health check: http://{addr}/health");
        axum::serve(listener, app).await?;
        Ok(())
    })
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/predict", post(predict))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    status: &'static str,
    message: &'static str,
}

/// GET /
async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        message: "bandmap evaluation API is running",
    })
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    uptime_seconds: u64,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = Utc::now().signed_duration_since(state.started_at);
    Json(HealthResponse {
        status: "ok",
        service: "bandmap",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: uptime.num_seconds().max(0) as u64,
    })
}

/// POST /predict
async fn predict(
    State(state): State<AppState>,
    Json(request): Json<AttemptRequest>,
) -> std::result::Result<Json<ResultRecord>, ApiError> {
    let record = state.engine.evaluate(&request)?;
    Ok(Json(record))
}

/// Engine error with its HTTP mapping
struct ApiError(EngineError);

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        Self(err)
    }
}

/// Invalid scores are the caller's fault; a missing classifier is ours.
fn status_for(err: &EngineError) -> StatusCode {
    match err {
        EngineError::InvalidScore { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        EngineError::ClassifierUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::model::ModelArtifact;
    use crate::config::EngineConfig;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn test_state() -> AppState {
        let mut centroids = BTreeMap::new();
        centroids.insert("Basic".to_string(), vec![0.3, 0.3]);
        centroids.insert("Exemplary".to_string(), vec![0.9, 0.9]);
        let artifact = ModelArtifact {
            labels: vec!["Basic".to_string(), "Exemplary".to_string()],
            feature_names: Some(vec!["Algebra".to_string(), "Geometry".to_string()]),
            centroids,
            sharpness: 4.0,
        };
        let classifier = Arc::new(CentroidModel::from_artifact(artifact).unwrap());
        AppState::new(Arc::new(Engine::new(classifier, EngineConfig::default())))
    }

    fn request(topic_scores: serde_json::Value) -> AttemptRequest {
        serde_json::from_value(json!({
            "student_id": 1,
            "exam_id": 2,
            "topic_scores": topic_scores,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_predict_handler_returns_record() {
        let response = predict(
            State(test_state()),
            Json(request(json!({"Algebra": 0.95, "Geometry": 0.92}))),
        )
        .await
        .unwrap();
        assert_eq!(response.0.predicted_band, "Exemplary");
        assert_eq!(response.0.band_group, "Strong");
    }

    #[tokio::test]
    async fn test_predict_handler_maps_invalid_score_to_422() {
        let err = predict(
            State(test_state()),
            Json(request(json!({"Algebra": null}))),
        )
        .await
        .err()
        .unwrap();
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&EngineError::invalid_score("A", "bad")),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_for(&EngineError::classifier("gone")),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_for(&EngineError::config("bad")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
