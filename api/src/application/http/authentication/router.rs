use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    resend_confirmation::{__path_resend_confirmation, resend_confirmation},
    sign_in::{__path_sign_in, sign_in},
    sign_out::{__path_sign_out, sign_out},
    sign_up::{__path_sign_up, sign_up},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(sign_up, sign_in, sign_out, resend_confirmation))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/auth/signout", state.args.server.root_path),
            post(sign_out),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
        .route(
            &format!("{}/auth/signup", state.args.server.root_path),
            post(sign_up),
        )
        .route(
            &format!("{}/auth/signin", state.args.server.root_path),
            post(sign_in),
        )
        .route(
            &format!("{}/auth/resend-confirmation", state.args.server.root_path),
            post(resend_confirmation),
        )
}
