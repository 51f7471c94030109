pub mod account;
pub mod authentication;
pub mod health;
pub mod library;
pub mod photo;
pub mod recipe_suggestion;
pub mod server;
pub mod user_recipe;
