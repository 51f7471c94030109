use chrono::{TimeZone, Utc};

use crate::{
    domain::library::entities::LibraryRecipe,
    entity::library_recipes::{ActiveModel, Model},
};
use sea_orm::ActiveValue::Set;

impl From<Model> for LibraryRecipe {
    fn from(model: Model) -> Self {
        LibraryRecipe {
            id: model.id,
            title: model.title,
            ingredients: model.ingredients,
            instructions: model.instructions,
            photo_url: model.photo_url,
            source: model.source,
            created_at: Utc.from_utc_datetime(&model.created_at),
        }
    }
}

impl From<LibraryRecipe> for ActiveModel {
    fn from(recipe: LibraryRecipe) -> Self {
        ActiveModel {
            id: Set(recipe.id),
            title: Set(recipe.title),
            ingredients: Set(recipe.ingredients),
            instructions: Set(recipe.instructions),
            photo_url: Set(recipe.photo_url),
            source: Set(recipe.source),
            created_at: Set(recipe.created_at.naive_utc()),
        }
    }
}
