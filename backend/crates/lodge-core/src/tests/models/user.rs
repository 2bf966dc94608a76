use crate::{CoreError, NewUser, NotificationSettings, ProfileUpdate, Role, User};

use chrono::Utc;
use googletest::prelude::*;

fn stored_user(role: Role) -> User {
    let now = Utc::now();
    User {
        id: 5,
        email: "host@email.com".to_string(),
        username: "ivica98".to_string(),
        password: "host".to_string(),
        name: "Ivica".to_string(),
        surname: "Roganovic".to_string(),
        address: "Maksima Gorkog 17a".to_string(),
        role,
        notifications: NotificationSettings::defaults_for(role),
        created_at: now,
        updated_at: now,
    }
}

fn update_for(user: &User) -> ProfileUpdate {
    ProfileUpdate {
        name: "Ivan".to_string(),
        surname: user.surname.clone(),
        email: "ivan@email.com".to_string(),
        address: user.address.clone(),
        notifications: user.notifications,
        old_password: None,
        new_password: None,
    }
}

#[test]
fn given_invalid_email_when_registering_then_validation_error() {
    let result = NewUser::new(
        "invalid_email".to_string(),
        "user".to_string(),
        "password".to_string(),
        "Name".to_string(),
        "Surname".to_string(),
        "Address".to_string(),
        Role::Host,
    );

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_guest_registration_when_built_then_guest_notification_defaults_apply() {
    let new_user = NewUser::new(
        "guest@email.com".to_string(),
        "makulica".to_string(),
        "guest".to_string(),
        "Jovana".to_string(),
        "Mustur".to_string(),
        "Novi Sad".to_string(),
        Role::Guest,
    )
    .unwrap();

    assert_that!(
        new_user.notifications,
        eq(NotificationSettings::defaults_for(Role::Guest))
    );
}

#[test]
fn given_profile_update_when_applied_then_fields_change_and_role_does_not() {
    let mut user = stored_user(Role::Host);
    let update = update_for(&user);

    user.apply_profile_update(update).unwrap();

    assert_that!(user.name, eq("Ivan"));
    assert_that!(user.email, eq("ivan@email.com"));
    assert_that!(user.role, eq(Role::Host));
    assert_that!(user.password, eq("host"));
}

#[test]
fn given_wrong_old_password_when_updating_then_nothing_changes() {
    let mut user = stored_user(Role::Host);
    let original = user.clone();
    let mut update = update_for(&user);
    update.old_password = Some("wrong".to_string());
    update.new_password = Some("new-secret".to_string());

    let result = user.apply_profile_update(update);

    assert_that!(result, err(anything()));
    assert_that!(user, eq(&original));
}

#[test]
fn given_matching_old_password_when_updating_then_password_is_replaced() {
    let mut user = stored_user(Role::Guest);
    let mut update = update_for(&user);
    update.old_password = Some("host".to_string());
    update.new_password = Some("new-secret".to_string());

    user.apply_profile_update(update).unwrap();

    assert_that!(user.password_matches("new-secret"), eq(true));
}

#[test]
fn given_empty_new_password_when_changing_then_validation_error() {
    let mut user = stored_user(Role::Guest);

    let result = user.change_password("host", "  ");

    assert_that!(result, err(anything()));
    assert_that!(user.password, eq("host"));
}
