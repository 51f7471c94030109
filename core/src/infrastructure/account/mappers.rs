use chrono::{TimeZone, Utc};
use sea_orm::ActiveValue::Set;
use tracing::warn;

use crate::{
    domain::account::entities::{SubscriptionStatus, UserAccount},
    entity::users::{ActiveModel, Model},
};

impl From<Model> for UserAccount {
    fn from(model: Model) -> Self {
        let subscription_status = SubscriptionStatus::try_from(model.subscription_status.as_str())
            .unwrap_or_else(|e| {
                warn!(user_id = %model.id, "{}, treating as free", e);
                SubscriptionStatus::Free
            });

        UserAccount {
            id: model.id,
            email: model.email,
            name: model.name,
            avatar_url: model.avatar_url,
            subscription_status,
            trial_ends_at: model.trial_ends_at.map(|dt| dt.and_utc()),
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}

impl From<UserAccount> for ActiveModel {
    fn from(account: UserAccount) -> Self {
        ActiveModel {
            id: Set(account.id),
            email: Set(account.email),
            name: Set(account.name),
            avatar_url: Set(account.avatar_url),
            subscription_status: Set(account.subscription_status.as_str().to_string()),
            trial_ends_at: Set(account.trial_ends_at.map(|dt| dt.naive_utc())),
            created_at: Set(account.created_at.naive_utc()),
            updated_at: Set(account.updated_at.naive_utc()),
        }
    }
}
