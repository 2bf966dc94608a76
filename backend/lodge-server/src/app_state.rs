use lodge_auth::{AuthorizationGuard, TokenService};
use lodge_db::UserRepository;
use lodge_saga::DeletionSaga;

use sqlx::SqlitePool;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: TokenService,
    pub guard: AuthorizationGuard,
    pub saga: DeletionSaga,
}

impl AppState {
    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }
}
