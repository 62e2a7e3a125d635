use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// One-time password issued to an email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpRecord {
    pub id: Uuid,
    pub email: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
}

impl OtpRecord {
    /// Fresh, unused record expiring `OTP_TTL_SECS` after `now`.
    pub fn issue(email: &str, code: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.to_owned(),
            code,
            created_at: now,
            expires_at: now + Duration::seconds(OTP_TTL_SECS),
            used: false,
        }
    }
}

/// Rendered OTP email, ready for any transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// OTP time-to-live in seconds.
pub const OTP_TTL_SECS: i64 = 300;

/// Smallest and largest generated codes; every code has exactly 6 digits.
pub const OTP_CODE_MIN: u32 = 100_000;
pub const OTP_CODE_MAX: u32 = 999_999;

/// Lifetime of the session token handed out after a successful verification.
pub const SESSION_TOKEN_TTL_SECS: i64 = 3600;

pub const MSG_OTP_SENT: &str = "OTP sent successfully";
pub const MSG_OTP_VERIFIED: &str = "OTP verified successfully";
