use chrono::{TimeZone, Utc};
use sea_orm::ActiveValue::Set;

use crate::{
    domain::user_recipe::entities::UserRecipe,
    entity::user_recipes::{ActiveModel, Model},
};

impl From<Model> for UserRecipe {
    fn from(model: Model) -> Self {
        UserRecipe {
            id: model.id,
            owner_id: model.owner_id,
            title: model.title,
            ingredients: model.ingredients,
            instructions: model.instructions,
            photo_url: model.photo_url,
            created_at: Utc.from_utc_datetime(&model.created_at),
        }
    }
}

impl From<UserRecipe> for ActiveModel {
    fn from(recipe: UserRecipe) -> Self {
        ActiveModel {
            id: Set(recipe.id),
            owner_id: Set(recipe.owner_id),
            title: Set(recipe.title),
            ingredients: Set(recipe.ingredients),
            instructions: Set(recipe.instructions),
            photo_url: Set(recipe.photo_url),
            created_at: Set(recipe.created_at.naive_utc()),
        }
    }
}
