//! User account entity.

use crate::validation::{require_non_empty, validate_email};
use crate::{CoreError, CoreResult, NotificationSettings, ProfileUpdate, Role};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

/// A stored account.
///
/// `password` is an opaque credential compared by equality; it is never
/// serialized into responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub password: String,
    pub name: String,
    pub surname: String,
    pub address: String,
    /// Fixed at creation
    pub role: Role,
    pub notifications: NotificationSettings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An account that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password: String,
    pub name: String,
    pub surname: String,
    pub address: String,
    pub role: Role,
    pub notifications: NotificationSettings,
}

impl NewUser {
    /// Validate registration input and apply the role's notification defaults
    #[track_caller]
    pub fn new(
        email: String,
        username: String,
        password: String,
        name: String,
        surname: String,
        address: String,
        role: Role,
    ) -> CoreResult<Self> {
        validate_email(&email)?;
        require_non_empty("username", &username)?;
        require_non_empty("password", &password)?;

        Ok(Self {
            email,
            username,
            password,
            name,
            surname,
            address,
            role,
            notifications: NotificationSettings::defaults_for(role),
        })
    }
}

impl User {
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Apply an edit of the profile fields.
    ///
    /// Only the notification flags owned by the account's role are taken
    /// from the update. A password change is applied when `old_password`
    /// is present and matches.
    #[track_caller]
    pub fn apply_profile_update(&mut self, update: ProfileUpdate) -> CoreResult<()> {
        validate_email(&update.email)?;

        if let Some(old_password) = update.old_password.as_deref()
            && !old_password.is_empty()
        {
            self.change_password(old_password, update.new_password.as_deref().unwrap_or(""))?;
        }

        self.name = update.name;
        self.surname = update.surname;
        self.email = update.email;
        self.address = update.address;
        self.notifications.apply_for_role(self.role, &update.notifications);
        self.updated_at = Utc::now();

        Ok(())
    }

    #[track_caller]
    pub fn change_password(&mut self, old_password: &str, new_password: &str) -> CoreResult<()> {
        if !self.password_matches(old_password) {
            return Err(CoreError::Validation {
                message: "old password does not match".to_string(),
                field: Some("oldPassword".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        require_non_empty("newPassword", new_password)?;

        self.password = new_password.to_string();
        self.updated_at = Utc::now();

        Ok(())
    }
}
