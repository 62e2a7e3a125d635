use chrono::{DateTime, Utc};
use rand::RngExt;
use tracing::info;

use crate::domain::email::is_valid_email;
use crate::domain::message::render_otp_email;
use crate::domain::repository::{Clock, Mailer, OtpRepository};
use crate::domain::types::{MSG_OTP_SENT, OTP_CODE_MAX, OTP_CODE_MIN, OtpRecord};
use crate::error::OtpServiceError;

/// Uniform 6-digit numeric code in `[100000, 999999]`.
pub fn generate_code() -> String {
    let mut rng = rand::rng();
    rng.random_range(OTP_CODE_MIN..=OTP_CODE_MAX).to_string()
}

pub struct IssueOtpInput {
    pub email: String,
}

#[derive(Debug)]
pub struct IssueOtpOutput {
    pub message: &'static str,
    pub expires_at: DateTime<Utc>,
}

pub struct IssueOtpUseCase<R, M, C>
where
    R: OtpRepository,
    M: Mailer,
    C: Clock,
{
    pub otps: R,
    pub mailer: M,
    pub clock: C,
}

impl<R, M, C> IssueOtpUseCase<R, M, C>
where
    R: OtpRepository,
    M: Mailer,
    C: Clock,
{
    pub async fn execute(&self, input: IssueOtpInput) -> Result<IssueOtpOutput, OtpServiceError> {
        // 1. Reject malformed addresses before touching the store
        let email = input.email.trim();
        if !is_valid_email(email) {
            return Err(OtpServiceError::InvalidEmail);
        }

        // 2. Supersede any earlier code for this email
        let record = OtpRecord::issue(email, generate_code(), self.clock.now());
        self.otps.replace_for_email(&record).await?;

        // 3. Deliver. The new record stays persisted if this fails.
        self.mailer
            .send(&render_otp_email(email, &record.code))
            .await?;

        info!(email, otp_id = %record.id, "otp issued");
        Ok(IssueOtpOutput {
            message: MSG_OTP_SENT,
            expires_at: record.expires_at,
        })
    }
}
