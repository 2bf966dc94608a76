use crate::{
    DeletionError, DeletionEvent, DeletionReport, DeletionState, Result as DeletionResult,
};

use lodge_core::{Role, User};
use lodge_db::{DeletionRetryRepository, UserRepository};
use lodge_remote::{AccommodationClient, ReservationClient, ReservationParty};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, error, info, warn};

/// Deletes a user and everything other services hold for them.
///
/// Steps run strictly in order. The reservation precheck completes before
/// anything is mutated; once the user row is deleted the deletion is
/// reported as successful even if the accommodation cleanup has to be
/// deferred to the sweeper.
#[derive(Clone)]
pub struct DeletionSaga {
    users: UserRepository,
    retries: DeletionRetryRepository,
    reservations: ReservationClient,
    accommodations: AccommodationClient,
}

/// State and visited trail of one running deletion
struct SagaRun {
    user_id: i64,
    state: DeletionState,
    trail: Vec<DeletionState>,
}

impl SagaRun {
    fn new(user_id: i64) -> Self {
        Self {
            user_id,
            state: DeletionState::Start,
            trail: vec![DeletionState::Start],
        }
    }

    #[track_caller]
    fn advance(&mut self, event: DeletionEvent) -> DeletionResult<()> {
        let next = self.state.transition(event)?;
        debug!(
            "Deletion of user {}: {:?} --{:?}--> {:?}",
            self.user_id, self.state, event, next
        );
        self.state = next;
        self.trail.push(next);
        Ok(())
    }

    fn into_report(self, role: Role, retry_record_id: Option<i64>) -> DeletionReport {
        DeletionReport {
            user_id: self.user_id,
            role,
            final_state: self.state,
            trail: self.trail,
            retry_record_id,
        }
    }
}

impl DeletionSaga {
    pub fn new(
        users: UserRepository,
        retries: DeletionRetryRepository,
        reservations: ReservationClient,
        accommodations: AccommodationClient,
    ) -> Self {
        Self {
            users,
            retries,
            reservations,
            accommodations,
        }
    }

    /// Run the deletion of `user_id`.
    ///
    /// `bearer` is the caller's token, forwarded to the reservation service.
    pub async fn delete_user(
        &self,
        user_id: i64,
        bearer: Option<&str>,
    ) -> DeletionResult<DeletionReport> {
        let mut run = SagaRun::new(user_id);

        let user = match self.users.find_by_id(user_id).await? {
            Some(user) => {
                run.advance(DeletionEvent::UserResolved)?;
                user
            }
            None => {
                run.advance(DeletionEvent::UserMissing)?;
                return Err(DeletionError::UserNotFound {
                    user_id,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        self.precheck(&mut run, &user, bearer).await?;
        self.purge_local(&mut run, &user).await?;

        match user.role {
            Role::Guest => {
                run.advance(DeletionEvent::GuestAccount)?;
                info!("Deleted guest {}", user.id);
                Ok(run.into_report(user.role, None))
            }
            Role::Host => {
                run.advance(DeletionEvent::HostAccount)?;
                let retry_record_id = self.compensate_remote(&mut run, &user).await?;
                Ok(run.into_report(user.role, retry_record_id))
            }
        }
    }

    async fn precheck(
        &self,
        run: &mut SagaRun,
        user: &User,
        bearer: Option<&str>,
    ) -> DeletionResult<()> {
        let party = ReservationParty::for_role(user.role);

        match self
            .reservations
            .active_reservations(user.id, party, bearer)
            .await
        {
            Ok(reservations) if reservations.is_empty() => Ok(()),
            Ok(reservations) => {
                run.advance(DeletionEvent::ReservationsActive)?;
                info!(
                    "Refusing to delete user {}: {} open reservation request(s)",
                    user.id,
                    reservations.len()
                );
                Err(DeletionError::HasActiveReservations {
                    user_id: user.id,
                    party: party.as_str(),
                    count: reservations.len(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(e) => {
                run.advance(DeletionEvent::ReservationServiceUnavailable)?;
                warn!("Reservation precheck for user {} failed: {}", user.id, e);
                Err(DeletionError::DependencyUnavailable {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }

    async fn purge_local(&self, run: &mut SagaRun, user: &User) -> DeletionResult<()> {
        match self.users.delete(user.id).await {
            Ok(true) => run.advance(DeletionEvent::LocalPurged),
            Ok(false) => {
                // Removed by a concurrent deletion between lookup and purge
                run.advance(DeletionEvent::LocalPurgeFailed)?;
                Err(DeletionError::UserNotFound {
                    user_id: user.id,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(e) => {
                run.advance(DeletionEvent::LocalPurgeFailed)?;
                Err(DeletionError::Store(e))
            }
        }
    }

    /// Remove the host's accommodations, deferring to the sweeper on failure.
    ///
    /// Returns the id of the retry record when one was written.
    async fn compensate_remote(
        &self,
        run: &mut SagaRun,
        user: &User,
    ) -> DeletionResult<Option<i64>> {
        match self.accommodations.delete_all_for_host(user.id).await {
            Ok(()) => {
                run.advance(DeletionEvent::AccommodationsPurged)?;
                info!("Deleted host {} and their accommodations", user.id);
                Ok(None)
            }
            Err(e) => {
                run.advance(DeletionEvent::AccommodationPurgeFailed)?;
                warn!(
                    "Accommodation cleanup for host {} failed, deferring to sweeper: {}",
                    user.id, e
                );

                match self.retries.create(user.id).await {
                    Ok(record) => Ok(Some(record.id)),
                    Err(e) => {
                        error!(
                            "Failed to record pending accommodation cleanup for host {}: {}",
                            user.id, e
                        );
                        Ok(None)
                    }
                }
            }
        }
    }
}
