pub mod user_account_repository;
