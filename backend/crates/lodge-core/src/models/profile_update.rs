use crate::NotificationSettings;

/// Profile edit submitted by the account owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub address: String,
    pub notifications: NotificationSettings,
    /// Present when the edit also changes the password
    pub old_password: Option<String>,
    pub new_password: Option<String>,
}
