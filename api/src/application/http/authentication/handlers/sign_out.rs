use axum::{extract::State, http::StatusCode};
use temai_core::domain::authentication::ports::AuthService;

use crate::application::{
    auth::RequiredSession,
    http::server::{
        api_entities::api_error::{ApiError, ApiErrorResponse},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/signout",
    tag = "auth",
    summary = "Sign out",
    description = "Revokes the caller's refresh tokens at the identity provider.",
    responses(
        (status = 204, description = "Signed out"),
        (status = 401, body = ApiErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn sign_out(
    State(state): State<AppState>,
    RequiredSession(session): RequiredSession,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .sign_out(session)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
