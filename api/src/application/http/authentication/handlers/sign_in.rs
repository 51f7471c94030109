use axum::extract::State;
use serde::{Deserialize, Serialize};
use temai_core::domain::authentication::{
    entities::AuthTokens, ports::AuthService, value_objects::SignInInput,
};
use utoipa::ToSchema;

use crate::application::http::{
    authentication::validators::SignInValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SignInResponse {
    pub data: AuthTokens,
}

#[utoipa::path(
    post,
    path = "/signin",
    tag = "auth",
    summary = "Sign in",
    responses(
        (status = 200, body = SignInResponse),
        (status = 401, body = ApiErrorResponse)
    ),
    request_body = SignInValidator
)]
pub async fn sign_in(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SignInValidator>,
) -> Result<Response<SignInResponse>, ApiError> {
    let tokens = state
        .service
        .sign_in(SignInInput {
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SignInResponse { data: tokens }))
}
