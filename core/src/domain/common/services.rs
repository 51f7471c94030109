use crate::domain::{
    account::{ports::UserAccountRepository, policies::SubscriptionPolicy},
    authentication::ports::IdentityProvider,
    badge::ports::BadgeRepository,
    health::ports::HealthCheckRepository,
    library::ports::LibraryRecipeRepository,
    photo::ports::ObjectStoragePort,
    suggestion::ports::CompletionClient,
    user_recipe::ports::UserRecipeRepository,
};

/// Holds every outbound adapter. Each domain module implements its service
/// trait on this struct.
#[derive(Clone)]
pub struct Service<L, UR, A, B, C, I, O, HC>
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
    pub(crate) library_repository: L,
    pub(crate) user_recipe_repository: UR,
    pub(crate) account_repository: A,
    pub(crate) badge_repository: B,
    pub(crate) completion_client: C,
    pub(crate) identity_provider: I,
    pub(crate) object_storage: O,
    pub(crate) health_check_repository: HC,
    pub(crate) policy: SubscriptionPolicy,
}

impl<L, UR, A, B, C, I, O, HC> Service<L, UR, A, B, C, I, O, HC>
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
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        library_repository: L,
        user_recipe_repository: UR,
        account_repository: A,
        badge_repository: B,
        completion_client: C,
        identity_provider: I,
        object_storage: O,
        health_check_repository: HC,
    ) -> Self {
        Self {
            library_repository,
            user_recipe_repository,
            account_repository,
            badge_repository,
            completion_client,
            identity_provider,
            object_storage,
            health_check_repository,
            policy: SubscriptionPolicy,
        }
    }
}
