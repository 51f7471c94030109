use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_badges::{__path_get_badges, get_badges},
    get_me::{__path_get_me, get_me},
    get_plans::{__path_get_plans, get_plans},
    update_me::{__path_update_me, update_me},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_me, update_me, get_badges))]
pub struct AccountApiDoc;

#[derive(OpenApi)]
#[openapi(paths(get_plans))]
pub struct PlanApiDoc;

pub fn account_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/me", state.args.server.root_path),
            get(get_me).patch(update_me),
        )
        .route(
            &format!("{}/me/badges", state.args.server.root_path),
            get(get_badges),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
        .route(
            &format!("{}/plans", state.args.server.root_path),
            get(get_plans),
        )
}
