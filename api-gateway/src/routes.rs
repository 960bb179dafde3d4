//! JSON endpoint and router assembly

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::Method,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, info_span};
use uuid::Uuid;

use premium_common::{PredictionResult, RawUserInput};
use premium_engine::PredictionService;

use crate::config::GatewayConfig;
use crate::error::ApiError;
use crate::form;

// ============ STATE ============

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PredictionService>,
}

impl AppState {
    pub fn new(service: PredictionService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

// ============ RESPONSES ============

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(rename = "VERSION")]
    pub version: &'static str,
    pub model_load: bool,
}

// ============ HANDLERS ============

async fn home() -> Json<Value> {
    Json(json!({ "message": "Insurance Premium Prediction API" }))
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: state.service.model_version(),
        model_load: state.service.is_loaded(),
    })
}

async fn predict_premium(
    State(state): State<AppState>,
    payload: Result<Json<RawUserInput>, JsonRejection>,
) -> Result<Json<PredictionResult>, ApiError> {
    let Json(raw) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let request_id = Uuid::new_v4();
    let span = info_span!("predict", %request_id);

    span.in_scope(|| -> Result<Json<PredictionResult>, ApiError> {
        let assessment = state.service.assess(&raw)?;
        info!(
            category = %assessment.prediction.predicted_category,
            confidence = assessment.prediction.confidence,
            "Prediction served"
        );
        Ok(Json(assessment.prediction))
    })
}

// ============ ROUTER ============

/// Build the gateway router with its middleware stack
pub fn router(state: AppState, config: &GatewayConfig) -> Router {
    let app = Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .route("/predict", post(predict_premium))
        .route("/form", get(form::show_form).post(form::submit_form))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        );

    let app = if config.cors_allow_any {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers(Any),
        )
    } else {
        app
    };

    app.with_state(state)
}
