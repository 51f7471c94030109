use crate::domain::suggestion::entities::ImageReference;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerateRecipesInput {
    pub ingredients: Option<String>,
    pub image: Option<ImageReference>,
}
