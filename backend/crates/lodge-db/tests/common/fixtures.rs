use lodge_core::{NewUser, Role};

/// Creates a registration for `role` whose email and username derive from `tag`
pub fn create_test_new_user(tag: &str, role: Role) -> NewUser {
    NewUser::new(
        format!("{}@example.com", tag),
        tag.to_string(),
        "password".to_string(),
        "Test".to_string(),
        "User".to_string(),
        "Test Street 1".to_string(),
        role,
    )
    .expect("Fixture registration should be valid")
}
