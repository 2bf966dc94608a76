use crate::{DbError, Result as DbErrorResult};

use lodge_core::DeletionRetryRecord;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Durable queue of accommodation cleanups that still have to be confirmed.
///
/// Rows are appended by the deletion saga and removed by the sweeper. Each
/// call is an independent statement; there is no cross-row transaction.
#[derive(Clone)]
pub struct DeletionRetryRepository {
    pool: SqlitePool,
}

impl DeletionRetryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: i64) -> DbErrorResult<DeletionRetryRecord> {
        let now = Utc::now();
        let created_at = now.timestamp();

        let result =
            sqlx::query("INSERT INTO deletion_retries (user_id, created_at) VALUES (?, ?)")
                .bind(user_id)
                .bind(created_at)
                .execute(&self.pool)
                .await?;

        Ok(DeletionRetryRecord {
            id: result.last_insert_rowid(),
            user_id,
            created_at: DateTime::from_timestamp(created_at, 0).unwrap_or(now),
        })
    }

    /// All outstanding records, oldest first
    pub async fn find_all(&self) -> DbErrorResult<Vec<DeletionRetryRecord>> {
        let rows = sqlx::query(
            "SELECT id, user_id, created_at FROM deletion_retries ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(record_from_row).collect()
    }

    pub async fn find_by_user(&self, user_id: i64) -> DbErrorResult<Vec<DeletionRetryRecord>> {
        let rows = sqlx::query(
            "SELECT id, user_id, created_at FROM deletion_retries WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(record_from_row).collect()
    }

    /// Returns `false` if the record was already gone
    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM deletion_retries WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[track_caller]
fn record_from_row(row: &SqliteRow) -> DbErrorResult<DeletionRetryRecord> {
    let created_at: i64 = row.try_get("created_at")?;

    Ok(DeletionRetryRecord {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in deletion_retries.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
