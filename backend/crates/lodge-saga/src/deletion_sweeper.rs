use crate::Result as DeletionResult;

use lodge_db::DeletionRetryRepository;
use lodge_remote::AccommodationClient;

use std::time::Duration;

use log::{debug, info, warn};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// Period between sweeps (1 hour)
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Counts from one sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub attempted: usize,
    pub cleared: usize,
    pub remaining: usize,
}

/// Re-issues accommodation cleanups that failed during deletion.
///
/// Records are retried every cycle until the accommodation service accepts
/// the delete. There is no backoff and no attempt limit.
pub struct DeletionSweeper {
    retries: DeletionRetryRepository,
    accommodations: AccommodationClient,
    interval: Duration,
}

impl DeletionSweeper {
    pub fn new(retries: DeletionRetryRepository, accommodations: AccommodationClient) -> Self {
        Self {
            retries,
            accommodations,
            interval: DEFAULT_SWEEP_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Retry every outstanding record once
    pub async fn sweep_once(&self) -> DeletionResult<SweepReport> {
        let records = self.retries.find_all().await?;
        let mut report = SweepReport {
            attempted: records.len(),
            ..SweepReport::default()
        };

        for record in records {
            if let Err(e) = self.accommodations.delete_all_for_host(record.user_id).await {
                debug!(
                    "Accommodation cleanup for host {} still failing: {}",
                    record.user_id, e
                );
                report.remaining += 1;
                continue;
            }

            match self.retries.delete(record.id).await {
                Ok(_) => report.cleared += 1,
                Err(e) => {
                    // The cleanup is idempotent; the next sweep repeats it
                    warn!("Failed to remove retry record {}: {}", record.id, e);
                    report.remaining += 1;
                }
            }
        }

        Ok(report)
    }

    /// Start the sweeper background task.
    ///
    /// The first sweep runs one interval after start. Returns a handle that
    /// can be used to abort the task.
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                match self.sweep_once().await {
                    Ok(report) if report.attempted > 0 => info!(
                        "Deletion sweep: {} attempted, {} cleared, {} remaining",
                        report.attempted, report.cleared, report.remaining
                    ),
                    Ok(_) => debug!("Deletion sweep: nothing pending"),
                    Err(e) => warn!("Deletion sweep failed: {}", e),
                }
            }
        })
    }
}
