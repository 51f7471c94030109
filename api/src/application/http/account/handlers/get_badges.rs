use axum::extract::State;
use serde::{Deserialize, Serialize};
use temai_core::domain::{account::ports::AccountService, badge::entities::Badge};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredSession,
    http::server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BadgesResponse {
    pub data: Vec<Badge>,
}

#[utoipa::path(
    get,
    path = "/badges",
    tag = "account",
    summary = "Earned badges",
    responses(
        (status = 200, body = BadgesResponse),
        (status = 401, body = ApiErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn get_badges(
    State(state): State<AppState>,
    RequiredSession(session): RequiredSession,
) -> Result<Response<BadgesResponse>, ApiError> {
    let badges = state
        .service
        .list_badges(session)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(BadgesResponse { data: badges }))
}
