pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result as CoreResult};
pub use error_location::ErrorLocation;
pub use models::deletion_retry_record::DeletionRetryRecord;
pub use models::notification_settings::{NotificationFlag, NotificationSettings};
pub use models::profile_update::ProfileUpdate;
pub use models::role::Role;
pub use models::user::{NewUser, User};

#[cfg(test)]
mod tests;
