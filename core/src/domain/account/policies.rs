use chrono::{DateTime, Utc};

use crate::domain::{account::entities::UserAccount, common::entities::app_errors::CoreError};

/// Feature gates tied to the subscription tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubscriptionPolicy;

impl SubscriptionPolicy {
    /// Audio input is reserved to premium access.
    pub fn can_use_audio(
        &self,
        account: &UserAccount,
        now: DateTime<Utc>,
    ) -> Result<bool, CoreError> {
        Ok(account.has_premium_access(now))
    }
}
