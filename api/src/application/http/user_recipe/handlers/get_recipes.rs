use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use temai_core::domain::user_recipe::{
    entities::UserRecipe, ports::UserRecipeService, value_objects::GetUserRecipesFilter,
};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredSession,
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse},
                response::Response,
            },
            app_state::AppState,
        },
        user_recipe::validators::GetUserRecipesQuery,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserRecipesResponse {
    pub data: Vec<UserRecipe>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "user-recipe",
    summary = "List personal recipes",
    params(GetUserRecipesQuery),
    responses(
        (status = 200, body = UserRecipesResponse),
        (status = 401, body = ApiErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn get_recipes(
    State(state): State<AppState>,
    RequiredSession(session): RequiredSession,
    Query(query): Query<GetUserRecipesQuery>,
) -> Result<Response<UserRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .list_recipes(
            session,
            GetUserRecipesFilter {
                search: query.search,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UserRecipesResponse { data: recipes }))
}
