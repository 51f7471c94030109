use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAccountValidator {
    #[serde(default)]
    #[validate(length(max = 120, message = "name must be at most 120 characters"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(url(message = "avatar_url must be a valid URL"))]
    pub avatar_url: Option<String>,
}
