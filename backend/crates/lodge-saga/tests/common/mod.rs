#![allow(dead_code)]

use lodge_core::{NewUser, Role, User};
use lodge_db::{DeletionRetryRepository, UserRepository};
use lodge_remote::{AccommodationClient, ReservationClient, RoundRobin, build_http_client};
use lodge_saga::{DeletionSaga, DeletionSweeper};

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use wiremock::MockServer;

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

/// Saga and sweeper wired to an in-memory store and two mock services
pub struct SagaHarness {
    pub users: UserRepository,
    pub retries: DeletionRetryRepository,
    pub reservation_server: MockServer,
    pub accommodation_server: MockServer,
    pub saga: DeletionSaga,
}

impl SagaHarness {
    pub async fn new() -> Self {
        let pool = create_test_pool().await;
        let users = UserRepository::new(pool.clone());
        let retries = DeletionRetryRepository::new(pool);

        let reservation_server = MockServer::start().await;
        let accommodation_server = MockServer::start().await;

        let saga = DeletionSaga::new(
            users.clone(),
            retries.clone(),
            reservation_client(&reservation_server),
            accommodation_client(&accommodation_server),
        );

        Self {
            users,
            retries,
            reservation_server,
            accommodation_server,
            saga,
        }
    }

    /// Saga over the same store, with the given remote clients
    pub fn saga_with(
        &self,
        reservations: ReservationClient,
        accommodations: AccommodationClient,
    ) -> DeletionSaga {
        DeletionSaga::new(
            self.users.clone(),
            self.retries.clone(),
            reservations,
            accommodations,
        )
    }

    pub fn sweeper(&self) -> DeletionSweeper {
        DeletionSweeper::new(
            self.retries.clone(),
            accommodation_client(&self.accommodation_server),
        )
    }

    pub async fn create_user(&self, tag: &str, role: Role) -> User {
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

        self.users.create(&new_user).await.unwrap()
    }
}

pub fn reservation_client(server: &MockServer) -> ReservationClient {
    ReservationClient::new(
        build_http_client(Duration::from_secs(5)).unwrap(),
        Arc::new(RoundRobin::single(&server.uri())),
    )
}

pub fn accommodation_client(server: &MockServer) -> AccommodationClient {
    AccommodationClient::new(
        build_http_client(Duration::from_secs(5)).unwrap(),
        Arc::new(RoundRobin::single(&format!("{}/api", server.uri()))),
    )
}

/// Base URL of a server that has already shut down
pub async fn closed_server_uri() -> String {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);
    uri
}

pub fn reservation_client_at(base_url: &str) -> ReservationClient {
    ReservationClient::new(
        build_http_client(Duration::from_secs(2)).unwrap(),
        Arc::new(RoundRobin::single(base_url)),
    )
}

pub fn accommodation_client_at(base_url: &str) -> AccommodationClient {
    AccommodationClient::new(
        build_http_client(Duration::from_secs(2)).unwrap(),
        Arc::new(RoundRobin::single(base_url)),
    )
}
