use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

/// Milestones earned by contributing recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    PrimeiraReceita,
    SuperChef,
    Masterchef,
    ChefLendario,
}

impl BadgeKind {
    pub const ALL: [BadgeKind; 4] = [
        BadgeKind::PrimeiraReceita,
        BadgeKind::SuperChef,
        BadgeKind::Masterchef,
        BadgeKind::ChefLendario,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeKind::PrimeiraReceita => "primeira_receita",
            BadgeKind::SuperChef => "super_chef",
            BadgeKind::Masterchef => "masterchef",
            BadgeKind::ChefLendario => "chef_lendario",
        }
    }

    /// Recipe count needed to earn the badge.
    pub fn requirement(&self) -> u64 {
        match self {
            BadgeKind::PrimeiraReceita => 1,
            BadgeKind::SuperChef => 10,
            BadgeKind::Masterchef => 50,
            BadgeKind::ChefLendario => 100,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BadgeKind::PrimeiraReceita => "Primeira Receita",
            BadgeKind::SuperChef => "Super Chef",
            BadgeKind::Masterchef => "MasterChef",
            BadgeKind::ChefLendario => "Chef Lendário",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BadgeKind::PrimeiraReceita => "Enviou sua primeira receita",
            BadgeKind::SuperChef => "Enviou 10 receitas",
            BadgeKind::Masterchef => "Enviou 50 receitas",
            BadgeKind::ChefLendario => "Enviou 100 receitas",
        }
    }

    /// Badges reached at `recipe_count` that are not in `owned`.
    pub fn newly_earned(recipe_count: u64, owned: &[BadgeKind]) -> Vec<BadgeKind> {
        Self::ALL
            .into_iter()
            .filter(|kind| recipe_count >= kind.requirement() && !owned.contains(kind))
            .collect()
    }
}

impl TryFrom<&str> for BadgeKind {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| format!("unknown badge type: {value}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Badge {
    pub id: Uuid,
    pub user_id: Uuid,
    pub badge_type: BadgeKind,
    pub earned_at: DateTime<Utc>,
}

impl Badge {
    pub fn new(user_id: Uuid, badge_type: BadgeKind, earned_at: DateTime<Utc>) -> Self {
        Self {
            id: generate_uuid_v7(),
            user_id,
            badge_type,
            earned_at,
        }
    }
}
