pub mod generate_recipe;
pub mod generate_recipe_from_audio;
pub mod generate_recipe_from_image;
