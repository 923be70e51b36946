use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    #[schema(example = "Hello World")]
    pub message: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LivenessResponse {
    #[schema(example = "ok")]
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Welcome message",
    responses((status = 200, body = WelcomeResponse))
)]
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Hello World".to_string(),
    })
}

/// Answers as long as the process serves requests; does not probe Ollama.
#[utoipa::path(
    get,
    path = "/health/live",
    tag = "health",
    summary = "Liveness probe",
    responses((status = 200, body = LivenessResponse))
)]
pub async fn live() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "ok".to_string(),
    })
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/", root_path), get(root))
        .route(&format!("{}/health/live", root_path), get(live))
}
