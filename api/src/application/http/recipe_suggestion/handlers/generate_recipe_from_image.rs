use axum::extract::{Multipart, State};
use temai_core::domain::{
    photo::value_objects::MAX_PHOTO_BYTES,
    suggestion::{
        entities::ImageReference, ports::RecipeSuggestionService,
        value_objects::GenerateRecipesInput,
    },
};

use crate::application::http::{
    recipe_suggestion::handlers::generate_recipe::GenerateRecipesResponse,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, GENERATION_FAILED},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/image",
    tag = "recipe-suggestion",
    summary = "Generate recipes from a photo",
    description = "Multipart form with an `image` file and optional `ingredients` text. The model identifies the ingredients in the photo.",
    responses(
        (status = 200, body = GenerateRecipesResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 413, body = ApiErrorResponse)
    ),
)]
pub async fn generate_recipe_from_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<GenerateRecipesResponse>, ApiError> {
    let mut ingredients: Option<String> = None;
    let mut image: Option<ImageReference> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "ingredients" => ingredients = Some(field.text().await?),
            "image" => {
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                if !mime_type.starts_with("image/") {
                    return Err(ApiError::BadRequest(format!(
                        "Tipo de arquivo não suportado: {}",
                        mime_type
                    )));
                }

                let data = field.bytes().await?;
                if data.len() > MAX_PHOTO_BYTES {
                    return Err(ApiError::PayloadTooLarge(format!(
                        "Imagem muito grande, o limite é {} bytes",
                        MAX_PHOTO_BYTES
                    )));
                }

                image = Some(ImageReference::Inline {
                    mime_type,
                    data: data.to_vec(),
                });
            }
            _ => {}
        }
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Imagem é necessária".to_string()))?;

    let recipes = state
        .service
        .generate_recipes(GenerateRecipesInput {
            ingredients,
            image: Some(image),
        })
        .await
        .map_err(|e| ApiError::from(e).with_internal_message(GENERATION_FAILED))?;

    Ok(Response::OK(GenerateRecipesResponse { recipes }))
}
