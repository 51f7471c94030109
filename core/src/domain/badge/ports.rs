use uuid::Uuid;

use crate::domain::{badge::entities::Badge, common::entities::app_errors::CoreError};

#[cfg_attr(test, mockall::automock)]
pub trait BadgeRepository: Send + Sync {
    fn list_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Badge>, CoreError>> + Send;

    fn create_many(
        &self,
        badges: Vec<Badge>,
    ) -> impl Future<Output = Result<Vec<Badge>, CoreError>> + Send;
}
