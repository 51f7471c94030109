use axum::extract::State;
use temai_core::domain::account::{ports::AccountService, value_objects::UpdateAccountInput};

use crate::application::{
    auth::RequiredSession,
    http::{
        account::{handlers::get_me::AccountResponse, validators::UpdateAccountValidator},
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    patch,
    path = "",
    tag = "account",
    summary = "Update profile",
    responses(
        (status = 200, body = AccountResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 401, body = ApiErrorResponse)
    ),
    request_body = UpdateAccountValidator,
    security(("bearer" = []))
)]
pub async fn update_me(
    State(state): State<AppState>,
    RequiredSession(session): RequiredSession,
    ValidateJson(payload): ValidateJson<UpdateAccountValidator>,
) -> Result<Response<AccountResponse>, ApiError> {
    let account = state
        .service
        .update_account(
            session,
            UpdateAccountInput {
                name: payload.name,
                avatar_url: payload.avatar_url,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AccountResponse { data: account }))
}
