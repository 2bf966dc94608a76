//! Credential store: the only writer of `users` rows.
//!
//! The `role` column is written once by [`UserRepository::create`] and never
//! touched by [`UserRepository::save`].

use crate::{DbError, Result as DbErrorResult};

use lodge_core::{NewUser, NotificationSettings, Role, User};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const USER_COLUMNS: &str = r#"
    id, email, username, password, name, surname, address, role,
    reservation_request_notification, reservation_canceled_notification,
    self_review_notification, accommodation_review_notification,
    reservation_status_changed_notification, created_at, updated_at
"#;

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find the account whose email and password both match
    pub async fn check_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> DbErrorResult<Option<User>> {
        let sql = format!(
            "SELECT {} FROM users WHERE email = ? AND password = ?",
            USER_COLUMNS
        );

        let row = sqlx::query(&sql)
            .bind(email)
            .bind(password)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    /// Insert a new account. Duplicate email or username yields `DbError::Conflict`.
    pub async fn create(&self, new_user: &NewUser) -> DbErrorResult<User> {
        let inserted = self.insert(new_user, "INSERT").await?;

        inserted.ok_or_else(|| DbError::Conflict {
            message: format!("user {} was not inserted", new_user.email),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Insert unless an account with the same email or username exists.
    ///
    /// Returns `None` when the row was already there.
    pub async fn create_if_absent(&self, new_user: &NewUser) -> DbErrorResult<Option<User>> {
        self.insert(new_user, "INSERT OR IGNORE").await
    }

    async fn insert(&self, new_user: &NewUser, verb: &str) -> DbErrorResult<Option<User>> {
        let now = Utc::now();
        let timestamp = now.timestamp();
        let notifications = &new_user.notifications;

        let sql = format!(
            r#"
                {} INTO users (
                    email, username, password, name, surname, address, role,
                    reservation_request_notification, reservation_canceled_notification,
                    self_review_notification, accommodation_review_notification,
                    reservation_status_changed_notification, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            verb
        );

        let result = sqlx::query(&sql)
            .bind(&new_user.email)
            .bind(&new_user.username)
            .bind(&new_user.password)
            .bind(&new_user.name)
            .bind(&new_user.surname)
            .bind(&new_user.address)
            .bind(new_user.role.as_str())
            .bind(notifications.reservation_request)
            .bind(notifications.reservation_canceled)
            .bind(notifications.self_review)
            .bind(notifications.accommodation_review)
            .bind(notifications.reservation_status_changed)
            .bind(timestamp)
            .bind(timestamp)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let created_at = DateTime::from_timestamp(timestamp, 0).unwrap_or(now);

        Ok(Some(User {
            id: result.last_insert_rowid(),
            email: new_user.email.clone(),
            username: new_user.username.clone(),
            password: new_user.password.clone(),
            name: new_user.name.clone(),
            surname: new_user.surname.clone(),
            address: new_user.address.clone(),
            role: new_user.role,
            notifications: new_user.notifications,
            created_at,
            updated_at: created_at,
        }))
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<User>> {
        let sql = format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS);

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    /// Persist profile fields of an existing account.
    ///
    /// Returns `false` when the row no longer exists; the row is not recreated.
    pub async fn save(&self, user: &User) -> DbErrorResult<bool> {
        let notifications = &user.notifications;

        let result = sqlx::query(
            r#"
                UPDATE users SET
                    email = ?, username = ?, password = ?, name = ?, surname = ?, address = ?,
                    reservation_request_notification = ?,
                    reservation_canceled_notification = ?,
                    self_review_notification = ?,
                    accommodation_review_notification = ?,
                    reservation_status_changed_notification = ?,
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.name)
        .bind(&user.surname)
        .bind(&user.address)
        .bind(notifications.reservation_request)
        .bind(notifications.reservation_canceled)
        .bind(notifications.self_review)
        .bind(notifications.accommodation_review)
        .bind(notifications.reservation_status_changed)
        .bind(user.updated_at.timestamp())
        .bind(user.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard delete. Returns `false` when there was nothing to delete.
    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[track_caller]
fn user_from_row(row: &SqliteRow) -> DbErrorResult<User> {
    let role: String = row.try_get("role")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(User {
        id: row.try_get("id")?,
        email: row.try_get("email")?,
        username: row.try_get("username")?,
        password: row.try_get("password")?,
        name: row.try_get("name")?,
        surname: row.try_get("surname")?,
        address: row.try_get("address")?,
        role: Role::from_str(&role).map_err(|e| DbError::Initialization {
            message: format!("Invalid Role in users.role: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        notifications: NotificationSettings {
            reservation_request: row.try_get("reservation_request_notification")?,
            reservation_canceled: row.try_get("reservation_canceled_notification")?,
            self_review: row.try_get("self_review_notification")?,
            accommodation_review: row.try_get("accommodation_review_notification")?,
            reservation_status_changed: row.try_get("reservation_status_changed_notification")?,
        },
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in users.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in users.updated_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
