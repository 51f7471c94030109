use crate::domain::{
    common::entities::app_errors::CoreError,
    library::{
        entities::{LibraryRecipe, Paginated},
        value_objects::{GetLibraryFilter, LibraryPage, SearchRecipesInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait LibraryService: Send + Sync {
    /// Asks the completion service for recipes and appends them to the library.
    fn search_recipes(
        &self,
        input: SearchRecipesInput,
    ) -> impl Future<Output = Result<Vec<LibraryRecipe>, CoreError>> + Send;

    fn list_library(
        &self,
        filter: GetLibraryFilter,
    ) -> impl Future<Output = Result<Paginated<LibraryRecipe>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait LibraryRecipeRepository: Send + Sync {
    fn insert_many(
        &self,
        recipes: Vec<LibraryRecipe>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Inserts `recipes` only while the library holds no rows, serialized
    /// against concurrent callers. Returns whether anything was inserted.
    fn seed_if_empty(
        &self,
        recipes: Vec<LibraryRecipe>,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Newest first. `search` matches title or ingredients, case-insensitively.
    fn list(
        &self,
        page: LibraryPage,
    ) -> impl Future<Output = Result<Vec<LibraryRecipe>, CoreError>> + Send;

    fn count(&self, search: Option<String>)
    -> impl Future<Output = Result<u64, CoreError>> + Send;
}
