use lodge_core::{NotificationSettings, ProfileUpdate};

use serde::Deserialize;

/// Request body for PUT /api/users/{id}
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUserRequest {
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub address: String,
    /// Omitted means keep the current preferences
    pub notifications: Option<NotificationSettings>,
    pub old_password: Option<String>,
    pub new_password: Option<String>,
}

impl EditUserRequest {
    pub fn into_profile_update(self, current: NotificationSettings) -> ProfileUpdate {
        ProfileUpdate {
            name: self.name,
            surname: self.surname,
            email: self.email,
            address: self.address,
            notifications: self.notifications.unwrap_or(current),
            old_password: self.old_password,
            new_password: self.new_password,
        }
    }
}
