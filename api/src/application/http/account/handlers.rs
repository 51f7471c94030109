pub mod get_badges;
pub mod get_me;
pub mod get_plans;
pub mod update_me;
