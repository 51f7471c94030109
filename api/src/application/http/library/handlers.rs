pub mod get_library;
pub mod search_recipes;
