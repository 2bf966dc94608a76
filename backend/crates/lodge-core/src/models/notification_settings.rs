//! Notification preferences.
//!
//! Every account stores all five flags, but only the flags owned by the
//! account's [`Role`] are ever switched on or edited. The other flags stay
//! `false` for the lifetime of the account.

use crate::Role;

use serde::{Deserialize, Serialize};

/// A single notification preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationFlag {
    /// Host: a guest requested a reservation
    ReservationRequest,
    /// Host: a guest canceled a reservation
    ReservationCanceled,
    /// Host: someone reviewed the host
    SelfReview,
    /// Host: someone reviewed one of the host's accommodations
    AccommodationReview,
    /// Guest: a host accepted or rejected a reservation request
    ReservationStatusChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationSettings {
    pub reservation_request: bool,
    pub reservation_canceled: bool,
    pub self_review: bool,
    pub accommodation_review: bool,
    pub reservation_status_changed: bool,
}

impl NotificationSettings {
    /// Settings for a freshly created account: every flag the role owns is on
    pub fn defaults_for(role: Role) -> Self {
        let mut settings = Self::default();
        for flag in role.notification_flags() {
            settings.set(*flag, true);
        }
        settings
    }

    pub fn get(&self, flag: NotificationFlag) -> bool {
        match flag {
            NotificationFlag::ReservationRequest => self.reservation_request,
            NotificationFlag::ReservationCanceled => self.reservation_canceled,
            NotificationFlag::SelfReview => self.self_review,
            NotificationFlag::AccommodationReview => self.accommodation_review,
            NotificationFlag::ReservationStatusChanged => self.reservation_status_changed,
        }
    }

    pub fn set(&mut self, flag: NotificationFlag, value: bool) {
        match flag {
            NotificationFlag::ReservationRequest => self.reservation_request = value,
            NotificationFlag::ReservationCanceled => self.reservation_canceled = value,
            NotificationFlag::SelfReview => self.self_review = value,
            NotificationFlag::AccommodationReview => self.accommodation_review = value,
            NotificationFlag::ReservationStatusChanged => self.reservation_status_changed = value,
        }
    }

    /// Copy the flags owned by `role` from `incoming`, leaving the rest untouched
    pub fn apply_for_role(&mut self, role: Role, incoming: &NotificationSettings) {
        for flag in role.notification_flags() {
            self.set(*flag, incoming.get(*flag));
        }
    }
}
