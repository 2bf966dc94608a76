use crate::{NotificationSettings, Role};

use googletest::prelude::*;

#[test]
fn given_guest_role_when_defaults_built_then_only_status_changed_is_on() {
    let settings = NotificationSettings::defaults_for(Role::Guest);

    assert_that!(settings.reservation_status_changed, eq(true));
    assert_that!(settings.reservation_request, eq(false));
    assert_that!(settings.reservation_canceled, eq(false));
    assert_that!(settings.self_review, eq(false));
    assert_that!(settings.accommodation_review, eq(false));
}

#[test]
fn given_host_role_when_defaults_built_then_host_flags_are_on_and_guest_flag_off() {
    let settings = NotificationSettings::defaults_for(Role::Host);

    assert_that!(settings.reservation_request, eq(true));
    assert_that!(settings.reservation_canceled, eq(true));
    assert_that!(settings.self_review, eq(true));
    assert_that!(settings.accommodation_review, eq(true));
    assert_that!(settings.reservation_status_changed, eq(false));
}

#[test]
fn given_guest_settings_when_edit_touches_host_flags_then_host_flags_stay_off() {
    let mut settings = NotificationSettings::defaults_for(Role::Guest);
    let incoming = NotificationSettings {
        reservation_request: true,
        reservation_canceled: true,
        self_review: true,
        accommodation_review: true,
        reservation_status_changed: false,
    };

    settings.apply_for_role(Role::Guest, &incoming);

    assert_that!(settings, eq(NotificationSettings::default()));
}

#[test]
fn given_host_settings_when_edit_touches_guest_flag_then_guest_flag_stays_off() {
    let mut settings = NotificationSettings::defaults_for(Role::Host);
    let incoming = NotificationSettings {
        reservation_request: false,
        reservation_canceled: true,
        self_review: false,
        accommodation_review: true,
        reservation_status_changed: true,
    };

    settings.apply_for_role(Role::Host, &incoming);

    assert_that!(settings.reservation_request, eq(false));
    assert_that!(settings.reservation_canceled, eq(true));
    assert_that!(settings.self_review, eq(false));
    assert_that!(settings.accommodation_review, eq(true));
    assert_that!(settings.reservation_status_changed, eq(false));
}
