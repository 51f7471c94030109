pub mod account;
pub mod authentication;
pub mod badge;
pub mod common;
pub mod health;
pub mod library;
pub mod photo;
pub mod suggestion;
pub mod user_recipe;
