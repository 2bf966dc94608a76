pub mod deletion_retry_repository;
pub mod user_repository;
