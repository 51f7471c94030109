use axum::extract::State;
use serde::{Deserialize, Serialize};
use temai_core::domain::user_recipe::{
    entities::UserRecipe, ports::UserRecipeService, value_objects::CreateUserRecipeInput,
};
use utoipa::ToSchema;

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
        user_recipe::validators::CreateUserRecipeValidator,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserRecipeResponse {
    pub data: UserRecipe,
}

#[utoipa::path(
    post,
    path = "",
    tag = "user-recipe",
    summary = "Create a personal recipe",
    description = "Saves a recipe to the caller's collection and awards any badge the new total unlocks.",
    responses(
        (status = 200, body = UserRecipeResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 401, body = ApiErrorResponse)
    ),
    request_body = CreateUserRecipeValidator,
    security(("bearer" = []))
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    RequiredSession(session): RequiredSession,
    ValidateJson(payload): ValidateJson<CreateUserRecipeValidator>,
) -> Result<Response<UserRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .create_recipe(
            session,
            CreateUserRecipeInput {
                title: payload.title,
                ingredients: payload.ingredients,
                instructions: payload.instructions,
                photo_url: payload.photo_url,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UserRecipeResponse { data: recipe }))
}
