#![allow(dead_code)]

use lodge_auth::{AuthorizationGuard, TokenService, TokenSigner};
use lodge_core::{NewUser, Role, User};
use lodge_db::UserRepository;

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    lodge_db::MIGRATOR.run(&pool).await.unwrap();
    pool
}

pub struct TestAuth {
    pub tokens: TokenService,
    pub guard: AuthorizationGuard,
    pub users: UserRepository,
}

pub async fn setup() -> TestAuth {
    let pool = create_test_pool().await;
    let users = UserRepository::new(pool);
    let tokens = TokenService::with_default_ttl(TokenSigner::from_secret(TEST_SECRET));
    let guard = AuthorizationGuard::new(tokens.clone(), users.clone());

    TestAuth {
        tokens,
        guard,
        users,
    }
}

pub async fn create_user(users: &UserRepository, tag: &str, role: Role) -> User {
    let new_user = NewUser::new(
        format!("{tag}@example.com"),
        tag.to_string(),
        "password".to_string(),
        "Test".to_string(),
        "User".to_string(),
        "Main Street 1".to_string(),
        role,
    )
    .unwrap();

    users.create(&new_user).await.unwrap()
}
