pub mod user_recipe_repository;
