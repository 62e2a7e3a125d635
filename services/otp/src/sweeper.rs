use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, warn};

use crate::infra::clock::SystemClock;
use crate::infra::db::DbOtpRepository;
use crate::usecase::sweep::SweepExpiredOtpsUseCase;

pub type DbSweep = SweepExpiredOtpsUseCase<DbOtpRepository, SystemClock>;

/// Run the expiry sweep every `period` until the runtime shuts down.
///
/// A failed sweep is logged and retried on the next tick.
pub fn spawn_sweeper(usecase: DbSweep, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(period_secs = period.as_secs(), "otp sweeper started");

        loop {
            ticker.tick().await;
            match usecase.execute().await {
                Ok(0) => debug!("otp sweep found nothing to delete"),
                Ok(deleted) => info!(deleted, "expired otps deleted"),
                Err(e) => warn!(error = %e, "otp sweep failed"),
            }
        }
    })
}
