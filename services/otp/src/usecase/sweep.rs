use crate::domain::repository::{Clock, OtpRepository};
use crate::error::OtpServiceError;

/// Purges every record past its expiry, used or not.
pub struct SweepExpiredOtpsUseCase<R: OtpRepository, C: Clock> {
    pub otps: R,
    pub clock: C,
}

impl<R: OtpRepository, C: Clock> SweepExpiredOtpsUseCase<R, C> {
    pub async fn execute(&self) -> Result<u64, OtpServiceError> {
        self.otps.delete_expired(self.clock.now()).await
    }
}
