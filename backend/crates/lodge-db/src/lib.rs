pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::deletion_retry_repository::DeletionRetryRepository;
pub use repositories::user_repository::UserRepository;

use sqlx::migrate::Migrator;

/// Schema migrations, embedded at compile time
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
