use chrono::{TimeZone, Utc};
use sea_orm::ActiveValue::Set;

use crate::{
    domain::badge::entities::{Badge, BadgeKind},
    entity::badges::{ActiveModel, Model},
};

impl TryFrom<Model> for Badge {
    type Error = String;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Badge {
            id: model.id,
            user_id: model.user_id,
            badge_type: BadgeKind::try_from(model.badge_type.as_str())?,
            earned_at: Utc.from_utc_datetime(&model.earned_at),
        })
    }
}

impl From<Badge> for ActiveModel {
    fn from(badge: Badge) -> Self {
        ActiveModel {
            id: Set(badge.id),
            user_id: Set(badge.user_id),
            badge_type: Set(badge.badge_type.as_str().to_string()),
            earned_at: Set(badge.earned_at.naive_utc()),
        }
    }
}
