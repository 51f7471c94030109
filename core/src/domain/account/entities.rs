use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const TRIAL_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Free,
    Trial,
    Premium,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Free => "free",
            SubscriptionStatus::Trial => "trial",
            SubscriptionStatus::Premium => "premium",
        }
    }
}

impl TryFrom<&str> for SubscriptionStatus {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "free" => Ok(SubscriptionStatus::Free),
            "trial" => Ok(SubscriptionStatus::Trial),
            "premium" => Ok(SubscriptionStatus::Premium),
            other => Err(format!("unknown subscription status: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserAccount {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub subscription_status: SubscriptionStatus,
    pub trial_ends_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserAccount {
    /// New profile whose trial window starts at `now`.
    pub fn new_trial(id: Uuid, email: String, name: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            email,
            name,
            avatar_url: None,
            subscription_status: SubscriptionStatus::Trial,
            trial_ends_at: Some(trial_end(now)),
            created_at: now,
            updated_at: now,
        }
    }

    /// An expired trial counts as `free`.
    pub fn effective_status(&self, now: DateTime<Utc>) -> SubscriptionStatus {
        match (self.subscription_status, self.trial_ends_at) {
            (SubscriptionStatus::Trial, Some(ends_at)) if ends_at <= now => {
                SubscriptionStatus::Free
            }
            (SubscriptionStatus::Trial, None) => SubscriptionStatus::Free,
            (status, _) => status,
        }
    }

    pub fn has_premium_access(&self, now: DateTime<Utc>) -> bool {
        matches!(
            self.effective_status(now),
            SubscriptionStatus::Trial | SubscriptionStatus::Premium
        )
    }

    pub fn update(&mut self, name: Option<String>, avatar_url: Option<String>, now: DateTime<Utc>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(avatar_url) = avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        self.updated_at = now;
    }
}

pub fn trial_end(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::days(TRIAL_DAYS)
}

/// Account as returned to its owner, with the status already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AccountView {
    #[serde(flatten)]
    pub account: UserAccount,
    pub effective_status: SubscriptionStatus,
    pub has_premium_access: bool,
}

impl AccountView {
    pub fn at(account: UserAccount, now: DateTime<Utc>) -> Self {
        Self {
            effective_status: account.effective_status(now),
            has_premium_access: account.has_premium_access(now),
            account,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Plan {
    pub name: String,
    pub price: String,
    pub period: String,
    pub popular: bool,
    pub features: Vec<String>,
}
