pub mod create_recipe;
pub mod get_recipes;
pub mod save_suggestion;
