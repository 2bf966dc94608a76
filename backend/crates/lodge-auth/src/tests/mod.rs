
use lodge_core::{NotificationSettings, Role, User};

use chrono::Utc;

fn test_user(id: i64, role: Role) -> User {
    let now = Utc::now();
    User {
        id,
        email: format!("user{id}@example.com"),
        username: format!("user{id}"),
        password: "password".to_string(),
        name: "Test".to_string(),
        surname: "User".to_string(),
        address: "Main Street 1".to_string(),
        role,
        notifications: NotificationSettings::defaults_for(role),
        created_at: now,
        updated_at: now,
    }
}

const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
