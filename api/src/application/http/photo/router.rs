use axum::{Router, extract::DefaultBodyLimit, middleware, routing::post};
use temai_core::domain::photo::value_objects::MAX_PHOTO_BYTES;
use utoipa::OpenApi;

use super::handlers::upload_photo::{__path_upload_photo, upload_photo};
use crate::application::{auth::auth, http::server::app_state::AppState};

/// Leaves room for the multipart framing so oversize files reach the
/// size check and get a 413 with the error envelope.
const BODY_LIMIT: usize = MAX_PHOTO_BYTES + 1024 * 1024;

#[derive(OpenApi)]
#[openapi(paths(upload_photo))]
pub struct PhotoApiDoc;

pub fn photo_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/photos", state.args.server.root_path),
            post(upload_photo).layer(DefaultBodyLimit::max(BODY_LIMIT)),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
