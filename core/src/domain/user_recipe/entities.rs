use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    library::entities::require_recipe_text,
    suggestion::{entities::RecipeSuggestion, image_tagger::recipe_image_url},
};

/// Recipe authored or saved by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserRecipe {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserRecipe {
    pub fn new(
        owner_id: Uuid,
        title: &str,
        ingredients: &str,
        instructions: &str,
        photo_url: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, CoreError> {
        let (title, ingredients, instructions) =
            require_recipe_text(title, ingredients, instructions)?;

        Ok(Self {
            id: generate_uuid_v7(),
            owner_id,
            title,
            ingredients,
            instructions,
            photo_url: photo_url.filter(|url| !url.trim().is_empty()),
            created_at,
        })
    }

    /// One ingredient per line, steps numbered from 1.
    pub fn from_suggestion(
        owner_id: Uuid,
        suggestion: RecipeSuggestion,
        created_at: DateTime<Utc>,
    ) -> Result<Self, CoreError> {
        let ingredients = suggestion.ingredients.join("\n");
        let instructions = suggestion
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step))
            .collect::<Vec<_>>()
            .join("\n");

        Self::new(
            owner_id,
            &suggestion.name,
            &ingredients,
            &instructions,
            suggestion.image,
            created_at,
        )
    }

    pub fn with_resolved_photo(mut self) -> Self {
        if self.photo_url.is_none() {
            self.photo_url = Some(recipe_image_url(&self.title));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_is_flattened_to_text() {
        let suggestion = RecipeSuggestion {
            name: "Omelete".into(),
            ingredients: vec!["2 ovos".into(), "sal".into()],
            steps: vec!["Bata os ovos".into(), "Frite".into()],
            prep_time: Some("10 minutos".into()),
            difficulty: None,
            image: None,
        };

        let recipe = UserRecipe::from_suggestion(Uuid::nil(), suggestion, Utc::now()).unwrap();
        assert_eq!(recipe.ingredients, "2 ovos\nsal");
        assert_eq!(recipe.instructions, "1. Bata os ovos\n2. Frite");
        assert_eq!(recipe.photo_url, None);
    }

    #[test]
    fn suggestion_without_steps_is_rejected() {
        let suggestion = RecipeSuggestion {
            name: "Omelete".into(),
            ingredients: vec!["2 ovos".into()],
            steps: vec![],
            prep_time: None,
            difficulty: None,
            image: None,
        };

        assert!(matches!(
            UserRecipe::from_suggestion(Uuid::nil(), suggestion, Utc::now()),
            Err(CoreError::InvalidRequest(_))
        ));
    }
}
