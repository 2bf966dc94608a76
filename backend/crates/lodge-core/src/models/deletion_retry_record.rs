use chrono::{DateTime, Utc};

/// Pending accommodation cleanup for an account that has already been
/// removed from the credential store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionRetryRecord {
    pub id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}
