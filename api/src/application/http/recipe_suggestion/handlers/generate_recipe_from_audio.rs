use axum::extract::{Multipart, State};
use temai_core::domain::suggestion::{
    entities::{AudioClip, AudioSuggestions},
    ports::RecipeSuggestionService,
};

use crate::application::{
    auth::RequiredSession,
    http::server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, GENERATION_FAILED},
            response::Response,
        },
        app_state::AppState,
    },
};

/// Transcription endpoints cap uploads at 25 MB.
pub const MAX_AUDIO_BYTES: usize = 25 * 1024 * 1024;

#[utoipa::path(
    post,
    path = "/audio",
    tag = "recipe-suggestion",
    summary = "Generate recipes from a voice note",
    description = "Premium feature. Multipart form with an `audio` file; the clip is transcribed and the transcript used as the ingredient list.",
    responses(
        (status = 200, body = AudioSuggestions),
        (status = 401, body = ApiErrorResponse),
        (status = 403, body = ApiErrorResponse),
        (status = 413, body = ApiErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn generate_recipe_from_audio(
    State(state): State<AppState>,
    RequiredSession(session): RequiredSession,
    mut multipart: Multipart,
) -> Result<Response<AudioSuggestions>, ApiError> {
    let mut clip: Option<AudioClip> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("audio") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("audio.webm").to_string();
        let mime_type = field.content_type().unwrap_or("audio/webm").to_string();
        let data = field.bytes().await?;
        if data.len() > MAX_AUDIO_BYTES {
            return Err(ApiError::PayloadTooLarge(format!(
                "Áudio muito grande, o limite é {} bytes",
                MAX_AUDIO_BYTES
            )));
        }

        clip = Some(AudioClip {
            file_name,
            mime_type,
            data: data.to_vec(),
        });
    }

    let clip = clip.ok_or_else(|| ApiError::BadRequest("Áudio é necessário".to_string()))?;

    let suggestions = state
        .service
        .generate_recipes_from_audio(session, clip)
        .await
        .map_err(|e| ApiError::from(e).with_internal_message(GENERATION_FAILED))?;

    Ok(Response::OK(suggestions))
}
