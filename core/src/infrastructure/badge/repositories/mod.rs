pub mod badge_repository;
