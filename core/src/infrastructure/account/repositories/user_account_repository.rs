use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        account::{entities::UserAccount, ports::UserAccountRepository},
        common::entities::app_errors::CoreError,
    },
    entity::users::{ActiveModel, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresUserAccountRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserAccountRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserAccountRepository for PostgresUserAccountRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<UserAccount>, CoreError> {
        let account = Entity::find_by_id(id).one(&self.db).await.map_err(|e| {
            error!("Failed to get account by id: {}", e);
            CoreError::StorageError(e.to_string())
        })?;

        Ok(account.map(UserAccount::from))
    }

    async fn create(&self, account: UserAccount) -> Result<UserAccount, CoreError> {
        let created = Entity::insert(ActiveModel::from(account))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create account: {}", e);
                CoreError::StorageError(e.to_string())
            })?;

        Ok(UserAccount::from(created))
    }

    async fn update(&self, account: UserAccount) -> Result<UserAccount, CoreError> {
        let updated = Entity::update(ActiveModel::from(account))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update account: {}", e);
                match e {
                    sea_orm::DbErr::RecordNotUpdated => CoreError::NotFound,
                    other => CoreError::StorageError(other.to_string()),
                }
            })?;

        Ok(UserAccount::from(updated))
    }
}
