#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRecipeInput {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetUserRecipesFilter {
    pub search: Option<String>,
}
