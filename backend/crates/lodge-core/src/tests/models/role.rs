use crate::{NotificationFlag, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Host.as_str(), "host");
    assert_eq!(Role::Guest.as_str(), "guest");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("host").unwrap(), Role::Host);
    assert_eq!(Role::from_str("GUEST").unwrap(), Role::Guest);
    assert!(Role::from_str("admin").is_err());
}

#[test]
fn test_role_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&Role::Host).unwrap(), "\"HOST\"");
    assert_eq!(
        serde_json::from_str::<Role>("\"GUEST\"").unwrap(),
        Role::Guest
    );
}

#[test]
fn test_role_notification_flags_are_disjoint() {
    let host = Role::Host.notification_flags();
    let guest = Role::Guest.notification_flags();

    assert_eq!(host.len(), 4);
    assert_eq!(guest, &[NotificationFlag::ReservationStatusChanged]);
    assert!(host.iter().all(|flag| !guest.contains(flag)));
}
