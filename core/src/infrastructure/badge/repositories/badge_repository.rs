use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::{error, warn};
use uuid::Uuid;

use crate::{
    domain::{
        badge::{entities::Badge, ports::BadgeRepository},
        common::entities::app_errors::CoreError,
    },
    entity::badges::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresBadgeRepository {
    pub db: DatabaseConnection,
}

impl PostgresBadgeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl BadgeRepository for PostgresBadgeRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Badge>, CoreError> {
        let badges = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::EarnedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list badges: {}", e);
                CoreError::StorageError(e.to_string())
            })?
            .into_iter()
            .filter_map(|model| match Badge::try_from(model) {
                Ok(badge) => Some(badge),
                Err(e) => {
                    warn!("Skipping badge row: {}", e);
                    None
                }
            })
            .collect();

        Ok(badges)
    }

    async fn create_many(&self, badges: Vec<Badge>) -> Result<Vec<Badge>, CoreError> {
        if badges.is_empty() {
            return Ok(badges);
        }

        Entity::insert_many(badges.iter().cloned().map(ActiveModel::from))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create badges: {}", e);
                CoreError::StorageError(e.to_string())
            })?;

        Ok(badges)
    }
}
