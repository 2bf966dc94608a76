use crate::{DeletionError, Result as DeletionResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Where a deletion currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeletionState {
    Start,
    /// Asking the reservation service for open requests
    Precheck,
    /// The user row is gone; the deletion can no longer be undone
    PurgedLocal,
    /// Removing the host's accommodations
    CompensatingRemote,
    Done,
    /// Deleted locally, accommodation cleanup owed to the sweeper
    CompensationPending,
    Aborted,
}

/// Outcome of a saga step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeletionEvent {
    UserResolved,
    UserMissing,
    ReservationsActive,
    ReservationServiceUnavailable,
    LocalPurgeFailed,
    LocalPurged,
    GuestAccount,
    HostAccount,
    AccommodationsPurged,
    AccommodationPurgeFailed,
}

impl DeletionState {
    /// Apply `event`, rejecting any pair not in the transition table
    #[track_caller]
    pub fn transition(self, event: DeletionEvent) -> DeletionResult<Self> {
        use DeletionEvent as E;
        use DeletionState as S;

        let next = match (self, event) {
            (S::Start, E::UserResolved) => S::Precheck,
            (S::Start, E::UserMissing) => S::Aborted,
            (S::Precheck, E::ReservationsActive) => S::Aborted,
            (S::Precheck, E::ReservationServiceUnavailable) => S::Aborted,
            (S::Precheck, E::LocalPurgeFailed) => S::Aborted,
            (S::Precheck, E::LocalPurged) => S::PurgedLocal,
            (S::PurgedLocal, E::GuestAccount) => S::Done,
            (S::PurgedLocal, E::HostAccount) => S::CompensatingRemote,
            (S::CompensatingRemote, E::AccommodationsPurged) => S::Done,
            (S::CompensatingRemote, E::AccommodationPurgeFailed) => S::CompensationPending,
            (from, event) => {
                return Err(DeletionError::InvalidTransition {
                    from,
                    event,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        Ok(next)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::CompensationPending | Self::Aborted)
    }

    /// True once the user row has been deleted
    pub fn is_committed(&self) -> bool {
        matches!(
            self,
            Self::PurgedLocal | Self::CompensatingRemote | Self::Done | Self::CompensationPending
        )
    }
}
