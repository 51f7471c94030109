use axum::extract::State;
use serde::{Deserialize, Serialize};
use temai_core::domain::library::{
    entities::LibraryRecipe, ports::LibraryService, value_objects::SearchRecipesInput,
};
use utoipa::ToSchema;

use crate::application::http::{
    library::validators::SearchRecipesValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, SEARCH_FAILED, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchRecipesResponse {
    pub recipes: Vec<LibraryRecipe>,
}

#[utoipa::path(
    post,
    path = "/search-recipes",
    tag = "library",
    summary = "Search recipes",
    description = "Asks the model for six recipes matching the query and adds them to the shared library.",
    responses(
        (status = 200, body = SearchRecipesResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
    request_body = SearchRecipesValidator
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SearchRecipesValidator>,
) -> Result<Response<SearchRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .search_recipes(SearchRecipesInput {
            query: payload.query,
            page: payload.page,
        })
        .await
        .map_err(|e| ApiError::from(e).with_internal_message(SEARCH_FAILED))?;

    Ok(Response::OK(SearchRecipesResponse { recipes }))
}
