use serde::{Deserialize, Serialize};
use temai_core::domain::suggestion::entities::RecipeSuggestion;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRecipeValidator {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "ingredients is required"))]
    pub ingredients: String,

    #[validate(length(min = 1, message = "instructions is required"))]
    pub instructions: String,

    #[serde(default)]
    #[validate(url(message = "photo_url must be a valid URL"))]
    pub photo_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveSuggestionValidator {
    #[serde(flatten)]
    #[validate(custom(function = "validate_suggestion"))]
    pub suggestion: RecipeSuggestion,
}

fn validate_suggestion(suggestion: &RecipeSuggestion) -> Result<(), ValidationError> {
    if suggestion.name.trim().is_empty() {
        return Err(ValidationError::new("name").with_message("name is required".into()));
    }
    Ok(())
}

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetUserRecipesQuery {
    /// Matches the title, case-insensitively.
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn suggestion_keeps_its_own_shape() {
        let payload: SaveSuggestionValidator = serde_json::from_value(json!({
            "name": "Omelete",
            "ingredients": ["2 ovos"],
            "steps": ["Bata", "Frite"],
            "prep_time": "10 minutos"
        }))
        .unwrap();

        assert!(payload.validate().is_ok());
        assert_eq!(payload.suggestion.steps.len(), 2);
    }

    #[test]
    fn nameless_suggestion_is_rejected() {
        let payload: SaveSuggestionValidator =
            serde_json::from_value(json!({ "name": "  ", "ingredients": ["sal"] })).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn photo_url_must_parse() {
        let payload = CreateUserRecipeValidator {
            title: "Bolo".into(),
            ingredients: "farinha".into(),
            instructions: "asse".into(),
            photo_url: Some("não é url".into()),
        };
        assert!(payload.validate().is_err());
    }
}
