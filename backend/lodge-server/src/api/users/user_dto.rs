use lodge_core::{NotificationSettings, Role, User};

use serde::{Deserialize, Serialize};

/// User DTO for JSON serialization. The password never leaves the service.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub name: String,
    pub surname: String,
    pub address: String,
    pub role: Role,
    pub notifications: NotificationSettings,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            username: u.username,
            name: u.name,
            surname: u.surname,
            address: u.address,
            role: u.role,
            notifications: u.notifications,
        }
    }
}
