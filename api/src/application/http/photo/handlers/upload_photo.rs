use axum::extract::{Multipart, State};
use serde::{Deserialize, Serialize};
use temai_core::domain::photo::{
    entities::UploadedPhoto, ports::PhotoService, value_objects::UploadPhotoInput,
};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredSession,
    http::server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

const PHOTO_FIELD: &str = "photo";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UploadPhotoResponse {
    pub data: UploadedPhoto,
}

#[utoipa::path(
    post,
    path = "",
    tag = "photo",
    summary = "Upload a recipe photo",
    description = "Multipart form with a `photo` image of at most 10 MB. Returns a download URL valid for seven days.",
    responses(
        (status = 200, body = UploadPhotoResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 401, body = ApiErrorResponse),
        (status = 413, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn upload_photo(
    State(state): State<AppState>,
    RequiredSession(session): RequiredSession,
    mut multipart: Multipart,
) -> Result<Response<UploadPhotoResponse>, ApiError> {
    let mut input: Option<UploadPhotoInput> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(PHOTO_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field.bytes().await?;

        input = Some(UploadPhotoInput {
            file_name,
            mime_type,
            data,
        });
    }

    let input = input.ok_or_else(|| ApiError::BadRequest("Foto é necessária".to_string()))?;

    let photo = state
        .service
        .upload_photo(session, input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UploadPhotoResponse { data: photo }))
}
