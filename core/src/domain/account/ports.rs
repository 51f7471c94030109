use uuid::Uuid;

use crate::domain::{
    account::{
        entities::{AccountView, Plan, UserAccount},
        value_objects::UpdateAccountInput,
    },
    authentication::entities::Session,
    badge::entities::Badge,
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait AccountService: Send + Sync {
    /// Reads the caller's profile, creating a trial profile if the row is missing.
    fn get_current_account(
        &self,
        session: Session,
    ) -> impl Future<Output = Result<AccountView, CoreError>> + Send;

    fn update_account(
        &self,
        session: Session,
        input: UpdateAccountInput,
    ) -> impl Future<Output = Result<AccountView, CoreError>> + Send;

    fn list_badges(
        &self,
        session: Session,
    ) -> impl Future<Output = Result<Vec<Badge>, CoreError>> + Send;

    fn list_plans(&self) -> Vec<Plan>;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserAccountRepository: Send + Sync {
    fn get_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<UserAccount>, CoreError>> + Send;

    fn create(
        &self,
        account: UserAccount,
    ) -> impl Future<Output = Result<UserAccount, CoreError>> + Send;

    fn update(
        &self,
        account: UserAccount,
    ) -> impl Future<Output = Result<UserAccount, CoreError>> + Send;
}
