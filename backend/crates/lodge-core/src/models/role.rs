use crate::{CoreError, CoreResult, NotificationFlag};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Account role, fixed when the account is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Offers accommodations
    Host,
    /// Books accommodations
    Guest,
}

impl Role {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::Guest => "guest",
        }
    }

    /// Notification flags that belong to this role.
    ///
    /// This is the only place that decides which preferences a role owns;
    /// creation defaults and profile edits both go through it.
    pub fn notification_flags(&self) -> &'static [NotificationFlag] {
        match self {
            Self::Host => &[
                NotificationFlag::ReservationRequest,
                NotificationFlag::ReservationCanceled,
                NotificationFlag::SelfReview,
                NotificationFlag::AccommodationReview,
            ],
            Self::Guest => &[NotificationFlag::ReservationStatusChanged],
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "host" | "HOST" => Ok(Self::Host),
            "guest" | "GUEST" => Ok(Self::Guest),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
