use crate::DeletionState;

use lodge_core::Role;

/// Result of a deletion that got past the commit point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionReport {
    pub user_id: i64,
    pub role: Role,
    pub final_state: DeletionState,
    /// Every state visited, starting with `Start`
    pub trail: Vec<DeletionState>,
    /// Set when the accommodation cleanup was handed to the sweeper
    pub retry_record_id: Option<i64>,
}

impl DeletionReport {
    pub fn compensation_pending(&self) -> bool {
        self.final_state == DeletionState::CompensationPending
    }
}
