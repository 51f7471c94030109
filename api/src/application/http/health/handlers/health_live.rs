use axum::extract::State;
use serde::{Deserialize, Serialize};
use temai_core::domain::health::ports::HealthCheckService;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LiveResponse {
    pub status: String,
    pub response_time_ms: u64,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = LiveResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn health_live(State(state): State<AppState>) -> Result<Response<LiveResponse>, ApiError> {
    let response_time_ms = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(LiveResponse {
        status: "ok".to_string(),
        response_time_ms,
    }))
}
