use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
    prelude::Expr,
    sea_query::{IntoCondition, extension::postgres::PgExpr},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        user_recipe::{entities::UserRecipe, ports::UserRecipeRepository},
    },
    entity::user_recipes::{ActiveModel, Column, Entity},
    infrastructure::like_pattern,
};

#[derive(Debug, Clone)]
pub struct PostgresUserRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRecipeRepository for PostgresUserRecipeRepository {
    async fn create(&self, recipe: UserRecipe) -> Result<UserRecipe, CoreError> {
        let created = Entity::insert(ActiveModel::from(recipe))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create user recipe: {}", e);
                CoreError::StorageError(e.to_string())
            })?;

        Ok(UserRecipe::from(created))
    }

    async fn list_by_owner(
        &self,
        owner_id: Uuid,
        search: Option<String>,
    ) -> Result<Vec<UserRecipe>, CoreError> {
        let mut query = Entity::find().filter(Column::OwnerId.eq(owner_id));

        if let Some(term) = search {
            let pattern = like_pattern(&term);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Title).ilike(pattern.clone()).into_condition())
                    .add(Expr::col(Column::Ingredients).ilike(pattern).into_condition()),
            );
        }

        let recipes = query
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list user recipes: {}", e);
                CoreError::StorageError(e.to_string())
            })?
            .into_iter()
            .map(UserRecipe::from)
            .collect();

        Ok(recipes)
    }

    async fn count_by_owner(&self, owner_id: Uuid) -> Result<u64, CoreError> {
        Entity::find()
            .filter(Column::OwnerId.eq(owner_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count user recipes: {}", e);
                CoreError::StorageError(e.to_string())
            })
    }
}
