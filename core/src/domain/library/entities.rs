use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    suggestion::{image_tagger::recipe_image_url, lenient},
};

/// Shared catalogue entry. Rows are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LibraryRecipe {
    pub id: Uuid,
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub photo_url: Option<String>,
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LibraryRecipe {
    pub fn new(
        title: &str,
        ingredients: &str,
        instructions: &str,
        photo_url: Option<String>,
        source: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, CoreError> {
        let (title, ingredients, instructions) = require_recipe_text(title, ingredients, instructions)?;

        Ok(Self {
            id: generate_uuid_v7(),
            title,
            ingredients,
            instructions,
            photo_url: photo_url.filter(|url| !url.trim().is_empty()),
            source: source.filter(|s| !s.trim().is_empty()),
            created_at,
        })
    }

    /// Fills a missing photo from the title.
    pub fn with_resolved_photo(mut self) -> Self {
        if self.photo_url.is_none() {
            self.photo_url = Some(recipe_image_url(&self.title));
        }
        self
    }
}

/// Trims the three text fields and rejects any that ends up empty.
pub fn require_recipe_text(
    title: &str,
    ingredients: &str,
    instructions: &str,
) -> Result<(String, String, String), CoreError> {
    let fields = [
        ("title", title.trim()),
        ("ingredients", ingredients.trim()),
        ("instructions", instructions.trim()),
    ];

    if let Some((name, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
        return Err(CoreError::InvalidRequest(format!("{name} must not be empty")));
    }

    Ok((
        fields[0].1.to_string(),
        fields[1].1.to_string(),
        fields[2].1.to_string(),
    ))
}

/// Library entry as produced by the search prompt, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedLibraryRecipe {
    #[serde(alias = "titulo", alias = "nome", deserialize_with = "lenient::joined_text")]
    pub title: String,
    #[serde(
        default,
        alias = "ingredientes",
        deserialize_with = "lenient::joined_text"
    )]
    pub ingredients: String,
    #[serde(
        default,
        alias = "modo_preparo",
        deserialize_with = "lenient::joined_text"
    )]
    pub instructions: String,
    #[serde(default, alias = "foto_url", deserialize_with = "lenient::optional_text")]
    pub photo_url: Option<String>,
    #[serde(default, alias = "fonte", deserialize_with = "lenient::optional_text")]
    pub source: Option<String>,
}

impl GeneratedLibraryRecipe {
    pub fn stamp(self, created_at: DateTime<Utc>) -> Result<LibraryRecipe, CoreError> {
        LibraryRecipe::new(
            &self.title,
            &self.ingredients,
            &self.instructions,
            self.photo_url,
            self.source,
            created_at,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_fields() {
        let now = Utc::now();
        assert!(LibraryRecipe::new(" ", "ovos", "bata", None, None, now).is_err());
        assert!(LibraryRecipe::new("Bolo", "", "bata", None, None, now).is_err());
        assert!(LibraryRecipe::new("Bolo", "ovos", "\n", None, None, now).is_err());
    }

    #[test]
    fn missing_photo_is_resolved_from_title() {
        let recipe = LibraryRecipe::new("Sopa de legumes", "água", "ferva", Some(" ".into()), None, Utc::now())
            .unwrap()
            .with_resolved_photo();
        assert!(recipe.photo_url.unwrap().contains("photo-1547592166-23ac45744acd"));
    }

    #[test]
    fn generated_record_uses_portuguese_keys() {
        let draft: GeneratedLibraryRecipe = serde_json::from_value(serde_json::json!({
            "titulo": "Pizza caseira",
            "ingredientes": ["farinha", "fermento"],
            "modo_preparo": "Sove e asse",
            "foto_url": "https://images.unsplash.com/photo-1?w=400&h=300&fit=crop",
            "fonte": "Panelinha"
        }))
        .unwrap();

        let recipe = draft.stamp(Utc::now()).unwrap();
        assert_eq!(recipe.title, "Pizza caseira");
        assert_eq!(recipe.ingredients, "farinha, fermento");
        assert_eq!(recipe.source.as_deref(), Some("Panelinha"));
    }
}
