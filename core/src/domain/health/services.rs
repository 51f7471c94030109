use crate::domain::{
    account::ports::UserAccountRepository,
    authentication::ports::IdentityProvider,
    badge::ports::BadgeRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    library::ports::LibraryRecipeRepository,
    photo::ports::ObjectStoragePort,
    suggestion::ports::CompletionClient,
    user_recipe::ports::UserRecipeRepository,
};

impl<L, UR, A, B, C, I, O, HC> HealthCheckService for Service<L, UR, A, B, C, I, O, HC>
where
    L: LibraryRecipeRepository,
    UR: UserRecipeRepository,
    A: UserAccountRepository,
    B: BadgeRepository,
    C: CompletionClient,
    I: IdentityProvider,
    O: ObjectStoragePort,
    HC: HealthCheckRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
