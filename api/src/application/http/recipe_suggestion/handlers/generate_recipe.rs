use axum::extract::State;
use serde::{Deserialize, Serialize};
use temai_core::domain::suggestion::{
    entities::{ImageReference, RecipeSuggestion},
    ports::RecipeSuggestionService,
    value_objects::GenerateRecipesInput,
};
use utoipa::ToSchema;

use crate::application::http::{
    recipe_suggestion::validators::GenerateRecipeValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, GENERATION_FAILED, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateRecipesResponse {
    pub recipes: Vec<RecipeSuggestion>,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recipe-suggestion",
    summary = "Generate recipes",
    description = "Suggests three recipes from typed ingredients, an image URL, or both.",
    responses(
        (status = 200, body = GenerateRecipesResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
    request_body = GenerateRecipeValidator
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipeValidator>,
) -> Result<Response<GenerateRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .generate_recipes(GenerateRecipesInput {
            ingredients: payload.ingredients,
            image: payload.image_url.map(ImageReference::Url),
        })
        .await
        .map_err(|e| ApiError::from(e).with_internal_message(GENERATION_FAILED))?;

    Ok(Response::OK(GenerateRecipesResponse { recipes }))
}
