use uuid::Uuid;

use crate::domain::{
    authentication::entities::Session,
    common::entities::app_errors::CoreError,
    suggestion::entities::RecipeSuggestion,
    user_recipe::{
        entities::UserRecipe,
        value_objects::{CreateUserRecipeInput, GetUserRecipesFilter},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRecipeService: Send + Sync {
    fn create_recipe(
        &self,
        session: Session,
        input: CreateUserRecipeInput,
    ) -> impl Future<Output = Result<UserRecipe, CoreError>> + Send;

    fn list_recipes(
        &self,
        session: Session,
        filter: GetUserRecipesFilter,
    ) -> impl Future<Output = Result<Vec<UserRecipe>, CoreError>> + Send;

    fn save_suggestion(
        &self,
        session: Session,
        suggestion: RecipeSuggestion,
    ) -> impl Future<Output = Result<UserRecipe, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserRecipeRepository: Send + Sync {
    fn create(
        &self,
        recipe: UserRecipe,
    ) -> impl Future<Output = Result<UserRecipe, CoreError>> + Send;

    /// Newest first.
    fn list_by_owner(
        &self,
        owner_id: Uuid,
        search: Option<String>,
    ) -> impl Future<Output = Result<Vec<UserRecipe>, CoreError>> + Send;

    fn count_by_owner(&self, owner_id: Uuid) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
