use axum::extract::State;
use serde::Serialize;
use temai_core::domain::authentication::{
    entities::SignUpOutcome, ports::AuthService, value_objects::SignUpInput,
};
use utoipa::ToSchema;

use crate::application::http::{
    authentication::validators::SignUpValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct SignUpResponse {
    pub data: SignUpOutcome,
}

#[utoipa::path(
    post,
    path = "/signup",
    tag = "auth",
    summary = "Sign up",
    description = "Registers the user with a three-day trial. When email confirmation is enabled no tokens are returned until the address is confirmed.",
    responses(
        (status = 200, body = SignUpResponse),
        (status = 400, body = ApiErrorResponse)
    ),
    request_body = SignUpValidator
)]
pub async fn sign_up(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SignUpValidator>,
) -> Result<Response<SignUpResponse>, ApiError> {
    let outcome = state
        .service
        .sign_up(SignUpInput {
            email: payload.email,
            password: payload.password,
            name: payload.name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SignUpResponse { data: outcome }))
}
