pub mod deletion_retry_record;
pub mod notification_settings;
pub mod profile_update;
pub mod role;
pub mod user;
