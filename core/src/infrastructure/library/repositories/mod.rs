pub mod library_recipe_repository;
