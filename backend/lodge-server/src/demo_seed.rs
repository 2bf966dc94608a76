//! Demo accounts for local development

use lodge_core::{NewUser, Role};
use lodge_db::UserRepository;

use sqlx::SqlitePool;

struct DemoUser {
    email: &'static str,
    username: &'static str,
    password: &'static str,
    role: Role,
}

const DEMO_USERS: &[DemoUser] = &[
    DemoUser {
        email: "host@email.com",
        username: "ivica98",
        password: "host",
        role: Role::Host,
    },
    DemoUser {
        email: "guest@email.com",
        username: "makulica",
        password: "guest",
        role: Role::Guest,
    },
];

/// Insert the demo host and guest unless they already exist.
///
/// Failures are logged and otherwise ignored; the service starts either way.
pub async fn seed_demo_users(pool: &SqlitePool) {
    let users = UserRepository::new(pool.clone());

    for demo in DEMO_USERS {
        let user = match NewUser::new(
            demo.email.to_string(),
            demo.username.to_string(),
            demo.password.to_string(),
            String::new(),
            String::new(),
            String::new(),
            demo.role,
        ) {
            Ok(user) => user,
            Err(e) => {
                log::warn!("Skipping demo user {}: {}", demo.email, e);
                continue;
            }
        };

        let result = users.create_if_absent(&user).await;

        match result {
            Ok(Some(created)) => {
                log::info!("Created demo {} user: {}", created.role, created.email);
            }
            Ok(None) => {
                log::debug!("Demo user {} already exists", user.email);
            }
            Err(e) => {
                log::warn!("Failed to create demo user {}: {}", user.email, e);
            }
        }
    }
}
