use axum::extract::State;
use serde::{Deserialize, Serialize};
use temai_core::domain::authentication::ports::AuthService;
use utoipa::ToSchema;

use crate::application::http::{
    authentication::validators::ResendConfirmationValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ResendConfirmationResponse {
    pub data: MessageBody,
}

#[utoipa::path(
    post,
    path = "/resend-confirmation",
    tag = "auth",
    summary = "Resend confirmation email",
    responses(
        (status = 200, body = ResendConfirmationResponse),
        (status = 400, body = ApiErrorResponse)
    ),
    request_body = ResendConfirmationValidator
)]
pub async fn resend_confirmation(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ResendConfirmationValidator>,
) -> Result<Response<ResendConfirmationResponse>, ApiError> {
    state
        .service
        .resend_confirmation(payload.email)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ResendConfirmationResponse {
        data: MessageBody {
            message: "Email de confirmação enviado! Verifique sua caixa de entrada.".to_string(),
        },
    }))
}
