#![allow(dead_code)]

//! Test infrastructure for lodge-server API tests

use lodge_auth::{AuthorizationGuard, TokenService, TokenSigner};
use lodge_core::{NewUser, Role, User};
use lodge_db::{DeletionRetryRepository, UserRepository};
use lodge_remote::{AccommodationClient, ReservationClient, RoundRobin, build_http_client};
use lodge_saga::DeletionSaga;
use lodge_server::AppState;

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use wiremock::MockServer;

pub const TEST_SECRET: &[u8] = b"lodge-server-test-secret-0123456789abcdef";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Failed to parse test database url");
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    lodge_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// App state wired to an in-memory store and two mock services
pub struct TestApp {
    pub state: AppState,
    pub users: UserRepository,
    pub retries: DeletionRetryRepository,
    pub reservation_server: MockServer,
    pub accommodation_server: MockServer,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = create_test_pool().await;
        let users = UserRepository::new(pool.clone());
        let retries = DeletionRetryRepository::new(pool.clone());

        let reservation_server = MockServer::start().await;
        let accommodation_server = MockServer::start().await;

        let http = build_http_client(Duration::from_secs(5)).expect("Failed to build client");
        let reservations = ReservationClient::new(
            http.clone(),
            Arc::new(RoundRobin::single(&reservation_server.uri())),
        );
        let accommodations = AccommodationClient::new(
            http,
            Arc::new(RoundRobin::single(&format!(
                "{}/api",
                accommodation_server.uri()
            ))),
        );

        let tokens = TokenService::with_default_ttl(TokenSigner::from_secret(TEST_SECRET));
        let state = AppState {
            pool,
            guard: AuthorizationGuard::new(tokens.clone(), users.clone()),
            tokens,
            saga: DeletionSaga::new(
                users.clone(),
                retries.clone(),
                reservations,
                accommodations,
            ),
        };

        Self {
            state,
            users,
            retries,
            reservation_server,
            accommodation_server,
        }
    }

    /// Create a user with password "password"
    pub async fn create_user(&self, tag: &str, role: Role) -> User {
        let new_user = NewUser::new(
            format!("{}@example.com", tag),
            tag.to_string(),
            "password".to_string(),
            "Test".to_string(),
            "User".to_string(),
            "Main Street 1".to_string(),
            role,
        )
        .expect("Invalid test user");

        self.users
            .create(&new_user)
            .await
            .expect("Failed to create test user")
    }

    pub fn token_for(&self, user: &User) -> String {
        self.state.tokens.issue(user).expect("Failed to issue token")
    }
}

/// Build a request with an optional bearer token and JSON body
pub fn request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
