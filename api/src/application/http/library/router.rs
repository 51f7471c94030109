use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    get_library::{__path_get_library, get_library},
    search_recipes::{__path_search_recipes, search_recipes},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(search_recipes))]
pub struct SearchApiDoc;

#[derive(OpenApi)]
#[openapi(paths(get_library))]
pub struct LibraryApiDoc;

pub fn library_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/search-recipes", state.args.server.root_path),
            post(search_recipes),
        )
        .route(
            &format!("{}/library", state.args.server.root_path),
            get(get_library),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
