use axum::extract::State;
use serde::Serialize;
use temai_core::domain::account::{entities::AccountView, ports::AccountService};
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

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct AccountResponse {
    pub data: AccountView,
}

#[utoipa::path(
    get,
    path = "",
    tag = "account",
    summary = "Current account",
    description = "Returns the caller's profile with the subscription status resolved against the trial window. A missing profile is created as a trial.",
    responses(
        (status = 200, body = AccountResponse),
        (status = 401, body = ApiErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn get_me(
    State(state): State<AppState>,
    RequiredSession(session): RequiredSession,
) -> Result<Response<AccountResponse>, ApiError> {
    let account = state
        .service
        .get_current_account(session)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AccountResponse { data: account }))
}
