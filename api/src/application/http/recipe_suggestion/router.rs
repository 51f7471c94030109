use axum::{Router, extract::DefaultBodyLimit, middleware, routing::post};
use temai_core::domain::photo::value_objects::MAX_PHOTO_BYTES;
use utoipa::OpenApi;

use super::handlers::{
    generate_recipe::{__path_generate_recipe, generate_recipe},
    generate_recipe_from_audio::{
        __path_generate_recipe_from_audio, MAX_AUDIO_BYTES, generate_recipe_from_audio,
    },
    generate_recipe_from_image::{__path_generate_recipe_from_image, generate_recipe_from_image},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

/// Room for the multipart framing around the largest accepted file.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(generate_recipe, generate_recipe_from_image, generate_recipe_from_audio))]
pub struct RecipeSuggestionApiDoc;

pub fn recipe_suggestion_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/api/generate-recipe", root_path),
            post(generate_recipe),
        )
        .route(
            &format!("{}/api/generate-recipe/image", root_path),
            post(generate_recipe_from_image)
                .layer(DefaultBodyLimit::max(MAX_PHOTO_BYTES + MULTIPART_OVERHEAD)),
        )
        .route(
            &format!("{}/api/generate-recipe/audio", root_path),
            post(generate_recipe_from_audio)
                .layer(DefaultBodyLimit::max(MAX_AUDIO_BYTES + MULTIPART_OVERHEAD)),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
