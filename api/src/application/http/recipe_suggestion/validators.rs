use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRecipeValidator {
    #[serde(default)]
    pub ingredients: Option<String>,

    #[serde(default, rename = "imageUrl", deserialize_with = "blank_as_none")]
    #[validate(custom(function = "validate_image_url"))]
    pub image_url: Option<String>,
}

/// An empty `imageUrl` means no image at all.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

/// Vision models accept remote images and data URLs only.
pub fn validate_image_url(value: &str) -> Result<(), ValidationError> {
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https" | "data") => Ok(()),
        _ => Err(ValidationError::new("image_url")
            .with_message("imageUrl deve ser uma URL http(s) ou data URL".into())),
    }
}
