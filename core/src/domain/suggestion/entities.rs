use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::suggestion::lenient;

/// A recipe proposed by the completion service. Never persisted as is.
///
/// The model is asked for Portuguese keys, English ones are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeSuggestion {
    #[serde(alias = "nome", deserialize_with = "lenient::joined_text")]
    pub name: String,
    #[serde(
        default,
        alias = "ingredientes",
        deserialize_with = "lenient::list_of_text"
    )]
    pub ingredients: Vec<String>,
    #[serde(
        default,
        alias = "modo_preparo",
        alias = "instructions",
        deserialize_with = "lenient::list_of_text"
    )]
    pub steps: Vec<String>,
    #[serde(
        default,
        alias = "tempo_preparo",
        deserialize_with = "lenient::optional_text"
    )]
    pub prep_time: Option<String>,
    #[serde(
        default,
        alias = "dificuldade",
        deserialize_with = "lenient::optional_text"
    )]
    pub difficulty: Option<String>,
    #[serde(default, alias = "imagem", deserialize_with = "lenient::optional_text")]
    pub image: Option<String>,
}

/// Image attached to a completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageReference {
    Url(String),
    Inline { mime_type: String, data: Vec<u8> },
}

impl ImageReference {
    /// URL form accepted by vision models; inline bytes become a data URL.
    pub fn to_url(&self) -> String {
        match self {
            ImageReference::Url(url) => url.clone(),
            ImageReference::Inline { mime_type, data } => format!(
                "data:{};base64,{}",
                mime_type,
                general_purpose::STANDARD.encode(data)
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub file_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_instruction: Option<String>,
    pub prompt: String,
    pub image: Option<ImageReference>,
    pub temperature: Option<f32>,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AudioSuggestions {
    pub transcript: String,
    pub recipes: Vec<RecipeSuggestion>,
}
