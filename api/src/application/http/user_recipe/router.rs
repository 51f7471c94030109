use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_recipe::{__path_create_recipe, create_recipe},
    get_recipes::{__path_get_recipes, get_recipes},
    save_suggestion::{__path_save_suggestion, save_suggestion},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_recipes, create_recipe, save_suggestion))]
pub struct UserRecipeApiDoc;

pub fn user_recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/me/recipes", state.args.server.root_path),
            get(get_recipes).post(create_recipe),
        )
        .route(
            &format!("{}/me/recipes/from-suggestion", state.args.server.root_path),
            post(save_suggestion),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
