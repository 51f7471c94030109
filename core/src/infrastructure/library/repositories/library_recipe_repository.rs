use sea_orm::{
    Condition, ConnectionTrait, DatabaseBackend, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Statement, TransactionTrait,
    prelude::Expr,
    sea_query::{IntoCondition, extension::postgres::PgExpr},
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        library::{
            entities::LibraryRecipe, ports::LibraryRecipeRepository, value_objects::LibraryPage,
        },
    },
    entity::library_recipes::{ActiveModel, Column, Entity},
    infrastructure::like_pattern,
};

/// Advisory lock key taken while seeding an empty library.
const SEED_LOCK_KEY: i64 = 0x7465_6d61_695f_6c69;

#[derive(Debug, Clone)]
pub struct PostgresLibraryRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresLibraryRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn search_condition(search: Option<&str>) -> Condition {
    match search {
        Some(term) => {
            let pattern = like_pattern(term);
            Condition::any()
                .add(Expr::col(Column::Title).ilike(pattern.clone()).into_condition())
                .add(Expr::col(Column::Ingredients).ilike(pattern).into_condition())
        }
        None => Condition::all(),
    }
}

impl LibraryRecipeRepository for PostgresLibraryRecipeRepository {
    async fn insert_many(&self, recipes: Vec<LibraryRecipe>) -> Result<(), CoreError> {
        if recipes.is_empty() {
            return Ok(());
        }

        Entity::insert_many(recipes.into_iter().map(ActiveModel::from))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to insert library recipes: {}", e);
                CoreError::StorageError(e.to_string())
            })?;

        Ok(())
    }

    async fn seed_if_empty(&self, recipes: Vec<LibraryRecipe>) -> Result<bool, CoreError> {
        let storage_error = |e: sea_orm::DbErr| {
            error!("Failed to seed library recipes: {}", e);
            CoreError::StorageError(e.to_string())
        };

        let txn = self.db.begin().await.map_err(storage_error)?;

        // Released on commit or rollback.
        txn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "SELECT pg_advisory_xact_lock($1)",
            [SEED_LOCK_KEY.into()],
        ))
        .await
        .map_err(storage_error)?;

        let existing = Entity::find().count(&txn).await.map_err(storage_error)?;
        if existing > 0 || recipes.is_empty() {
            txn.commit().await.map_err(storage_error)?;
            return Ok(false);
        }

        Entity::insert_many(recipes.into_iter().map(ActiveModel::from))
            .exec(&txn)
            .await
            .map_err(storage_error)?;
        txn.commit().await.map_err(storage_error)?;

        Ok(true)
    }

    async fn list(&self, page: LibraryPage) -> Result<Vec<LibraryRecipe>, CoreError> {
        let recipes = Entity::find()
            .filter(search_condition(page.search.as_deref()))
            .order_by_desc(Column::CreatedAt)
            .paginate(&self.db, page.per_page)
            .fetch_page(page.page.saturating_sub(1))
            .await
            .map_err(|e| {
                error!("Failed to list library recipes: {}", e);
                CoreError::StorageError(e.to_string())
            })?
            .into_iter()
            .map(LibraryRecipe::from)
            .collect();

        Ok(recipes)
    }

    async fn count(&self, search: Option<String>) -> Result<u64, CoreError> {
        Entity::find()
            .filter(search_condition(search.as_deref()))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count library recipes: {}", e);
                CoreError::StorageError(e.to_string())
            })
    }
}
