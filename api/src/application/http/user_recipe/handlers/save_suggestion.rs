use axum::extract::State;
use temai_core::domain::user_recipe::ports::UserRecipeService;

use crate::application::{
    auth::RequiredSession,
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        user_recipe::{
            handlers::create_recipe::UserRecipeResponse, validators::SaveSuggestionValidator,
        },
    },
};

#[utoipa::path(
    post,
    path = "/from-suggestion",
    tag = "user-recipe",
    summary = "Save a suggestion",
    description = "Stores a generated suggestion as a personal recipe. Ingredients become one per line and steps are numbered.",
    responses(
        (status = 200, body = UserRecipeResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 401, body = ApiErrorResponse)
    ),
    request_body = SaveSuggestionValidator,
    security(("bearer" = []))
)]
pub async fn save_suggestion(
    State(state): State<AppState>,
    RequiredSession(session): RequiredSession,
    ValidateJson(payload): ValidateJson<SaveSuggestionValidator>,
) -> Result<Response<UserRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .save_suggestion(session, payload.suggestion)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UserRecipeResponse { data: recipe }))
}
