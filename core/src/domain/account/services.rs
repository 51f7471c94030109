use chrono::Utc;
use tracing::info;

use crate::domain::{
    account::{
        entities::{AccountView, Plan, UserAccount},
        plans::plan_catalogue,
        ports::{AccountService, UserAccountRepository},
        value_objects::UpdateAccountInput,
    },
    authentication::{entities::Session, ports::IdentityProvider},
    badge::{entities::Badge, ports::BadgeRepository},
    common::{entities::app_errors::CoreError, non_blank, services::Service},
    health::ports::HealthCheckRepository,
    library::ports::LibraryRecipeRepository,
    photo::ports::ObjectStoragePort,
    suggestion::ports::CompletionClient,
    user_recipe::ports::UserRecipeRepository,
};

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
    /// Profile row for the caller, created on first access.
    pub(crate) async fn load_account(&self, session: &Session) -> Result<UserAccount, CoreError> {
        if let Some(account) = self.account_repository.get_by_id(session.user_id).await? {
            return Ok(account);
        }

        info!(user_id = %session.user_id, "creating missing account profile");
        let account = UserAccount::new_trial(
            session.user_id,
            session.email.clone(),
            session.preferred_name(),
            Utc::now(),
        );
        self.account_repository.create(account).await
    }
}

impl<L, UR, A, B, C, I, O, HC> AccountService for Service<L, UR, A, B, C, I, O, HC>
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
    async fn get_current_account(&self, session: Session) -> Result<AccountView, CoreError> {
        let account = self.load_account(&session).await?;
        Ok(AccountView::at(account, Utc::now()))
    }

    async fn update_account(
        &self,
        session: Session,
        input: UpdateAccountInput,
    ) -> Result<AccountView, CoreError> {
        let name = non_blank(input.name.as_deref()).map(str::to_string);
        let avatar_url = non_blank(input.avatar_url.as_deref()).map(str::to_string);
        if name.is_none() && avatar_url.is_none() {
            return Err(CoreError::InvalidRequest(
                "nothing to update: name or avatar_url is required".to_string(),
            ));
        }

        let mut account = self.load_account(&session).await?;
        let now = Utc::now();
        account.update(name, avatar_url, now);

        let account = self.account_repository.update(account).await?;
        Ok(AccountView::at(account, now))
    }

    async fn list_badges(&self, session: Session) -> Result<Vec<Badge>, CoreError> {
        self.badge_repository.list_by_user(session.user_id).await
    }

    fn list_plans(&self) -> Vec<Plan> {
        plan_catalogue()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        account::entities::SubscriptionStatus,
        common::services::test_support::{Mocks, session},
    };

    #[tokio::test]
    async fn missing_profile_is_created_as_trial() {
        let mut mocks = Mocks::new();
        mocks
            .accounts
            .expect_get_by_id()
            .returning(|_| Box::pin(async move { Ok(None) }));
        mocks
            .accounts
            .expect_create()
            .withf(|account| {
                account.name == "Cozinheira"
                    && account.subscription_status == SubscriptionStatus::Trial
                    && account.trial_ends_at.is_some()
            })
            .times(1)
            .returning(|account| Box::pin(async move { Ok(account) }));

        let view = mocks
            .into_service()
            .get_current_account(session())
            .await
            .unwrap();

        assert_eq!(view.account.email, "cozinheira@example.com");
        assert_eq!(view.effective_status, SubscriptionStatus::Trial);
        assert!(view.has_premium_access);
    }

    #[tokio::test]
    async fn existing_profile_is_not_recreated() {
        let mut mocks = Mocks::new();
        let existing = UserAccount::new_trial(
            session().user_id,
            "cozinheira@example.com".into(),
            "Chef".into(),
            Utc::now() - chrono::Duration::days(10),
        );
        mocks.accounts.expect_get_by_id().returning(move |_| {
            let existing = existing.clone();
            Box::pin(async move { Ok(Some(existing)) })
        });
        mocks.accounts.expect_create().never();

        let view = mocks
            .into_service()
            .get_current_account(session())
            .await
            .unwrap();

        assert_eq!(view.account.name, "Chef");
        assert_eq!(view.effective_status, SubscriptionStatus::Free);
    }

    #[tokio::test]
    async fn empty_update_is_rejected_before_storage() {
        let mut mocks = Mocks::new();
        mocks.accounts.expect_get_by_id().never();
        mocks.accounts.expect_update().never();

        let result = mocks
            .into_service()
            .update_account(
                session(),
                UpdateAccountInput {
                    name: Some("  ".into()),
                    avatar_url: None,
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn update_changes_name_only() {
        let mut mocks = Mocks::new();
        mocks.accounts.expect_get_by_id().returning(|id| {
            Box::pin(async move {
                Ok(Some(UserAccount::new_trial(
                    id,
                    "cozinheira@example.com".into(),
                    "Antigo".into(),
                    Utc::now(),
                )))
            })
        });
        mocks
            .accounts
            .expect_update()
            .returning(|account| Box::pin(async move { Ok(account) }));

        let view = mocks
            .into_service()
            .update_account(
                session(),
                UpdateAccountInput {
                    name: Some(" Novo ".into()),
                    avatar_url: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(view.account.name, "Novo");
        assert_eq!(view.account.avatar_url, None);
    }
}
