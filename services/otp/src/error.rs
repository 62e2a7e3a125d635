use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use wof_core::error::{error_response, log_internal};

/// OTP service error variants.
///
/// Every verification miss (wrong code, expired, already used, no record)
/// collapses into `InvalidOtp`; callers never learn which codes exist.
#[derive(Debug, thiserror::Error)]
pub enum OtpServiceError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Invalid email or OTP")]
    MissingCode,
    #[error("Invalid request body")]
    InvalidBody(#[from] JsonRejection),
    #[error("Invalid or expired OTP")]
    InvalidOtp,
    #[error("Failed to send OTP")]
    MailDelivery(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl OtpServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::MissingCode => "MISSING_CODE",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::InvalidOtp => "INVALID_OTP",
            Self::MailDelivery(_) => "MAIL_DELIVERY",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidEmail | Self::MissingCode | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::InvalidOtp => StatusCode::UNAUTHORIZED,
            Self::MailDelivery(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for OtpServiceError {
    fn into_response(self) -> Response {
        if let Self::MailDelivery(ref e) | Self::Internal(ref e) = self {
            let source: &(dyn std::error::Error + 'static) = e.as_ref();
            log_internal(self.kind(), source);
        }
        error_response(self.status(), self.kind(), &self.to_string())
    }
}
