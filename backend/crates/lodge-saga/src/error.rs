use crate::{DeletionEvent, DeletionState};

use lodge_db::DbError;
use lodge_remote::RemoteError;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeletionError {
    #[error("User {user_id} not found {location}")]
    UserNotFound {
        user_id: i64,
        location: ErrorLocation,
    },

    #[error("{party} has active reservations {location}")]
    HasActiveReservations {
        user_id: i64,
        party: &'static str,
        count: usize,
        location: ErrorLocation,
    },

    #[error("reservation service unreachable: {source} {location}")]
    DependencyUnavailable {
        #[source]
        source: RemoteError,
        location: ErrorLocation,
    },

    #[error("Invalid deletion transition: {event:?} in state {from:?} {location}")]
    InvalidTransition {
        from: DeletionState,
        event: DeletionEvent,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Store(#[from] DbError),
}

impl DeletionError {
    pub fn is_dependency_unavailable(&self) -> bool {
        matches!(self, Self::DependencyUnavailable { .. })
    }

    /// Message safe to show to the caller, without source location
    pub fn public_message(&self) -> String {
        match self {
            Self::UserNotFound { .. } => "user not found".to_string(),
            Self::HasActiveReservations { party, .. } => {
                format!("{} has active reservations", party)
            }
            Self::DependencyUnavailable { .. } => "reservation service unreachable".to_string(),
            Self::InvalidTransition { .. } | Self::Store(_) => {
                "user could not be deleted".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DeletionError>;
