//! User deletion across the local store and the remote services.
//!
//! [`DeletionSaga`] runs one deletion as an explicit state machine
//! ([`DeletionState`]). When the accommodation cleanup fails after the user
//! row is gone, a retry record is written and [`DeletionSweeper`] keeps
//! re-issuing the cleanup until it succeeds.

pub mod deletion_report;
pub mod deletion_saga;
pub mod deletion_state;
pub mod deletion_sweeper;
pub mod error;

pub use deletion_report::DeletionReport;
pub use deletion_saga::DeletionSaga;
pub use deletion_state::{DeletionEvent, DeletionState};
pub use deletion_sweeper::{DEFAULT_SWEEP_INTERVAL, DeletionSweeper, SweepReport};
pub use error::{DeletionError, Result};
