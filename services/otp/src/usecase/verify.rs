use crate::domain::email::is_valid_email;
use crate::domain::repository::{Clock, OtpRepository};
use crate::domain::types::MSG_OTP_VERIFIED;
use crate::error::OtpServiceError;
use crate::usecase::session::issue_session_token;

pub struct VerifyOtpInput {
    pub email: String,
    pub otp: String,
}

#[derive(Debug)]
pub struct VerifyOtpOutput {
    pub message: &'static str,
    pub token: String,
}

pub struct VerifyOtpUseCase<R: OtpRepository, C: Clock> {
    pub otps: R,
    pub clock: C,
    pub session_secret: String,
}

impl<R: OtpRepository, C: Clock> VerifyOtpUseCase<R, C> {
    pub async fn execute(&self, input: VerifyOtpInput) -> Result<VerifyOtpOutput, OtpServiceError> {
        let email = input.email.trim();
        if !is_valid_email(email) {
            return Err(OtpServiceError::InvalidEmail);
        }
        let code = input.otp.trim();
        if code.is_empty() {
            return Err(OtpServiceError::MissingCode);
        }

        let now = self.clock.now();
        let record = self
            .otps
            .find_active(email, code, now)
            .await?
            .ok_or(OtpServiceError::InvalidOtp)?;

        // A concurrent verifier may have consumed it between find and update.
        if !self.otps.consume(record.id, now).await? {
            return Err(OtpServiceError::InvalidOtp);
        }

        let token = issue_session_token(email, &self.session_secret, now)?;
        Ok(VerifyOtpOutput {
            message: MSG_OTP_VERIFIED,
            token,
        })
    }
}
