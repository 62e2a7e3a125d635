#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::types::{OtpEmail, OtpRecord};
use crate::error::OtpServiceError;

/// Persistent store for OTP records.
pub trait OtpRepository: Send + Sync {
    /// Delete every record for `record.email`, then insert `record`, atomically.
    async fn replace_for_email(&self, record: &OtpRecord) -> Result<(), OtpServiceError>;

    /// Find a record matching email + code that is unused and expires after `now`.
    async fn find_active(
        &self,
        email: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<OtpRecord>, OtpServiceError>;

    /// Flip `used` to true iff the record is still active at `now`.
    ///
    /// Must be a single conditional update. Returns `true` only for the caller
    /// whose update took effect.
    async fn consume(&self, id: Uuid, now: DateTime<Utc>) -> Result<bool, OtpServiceError>;

    /// Delete records whose expiry is before `now`. Returns the deleted count.
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, OtpServiceError>;
}

/// Outbound email transport.
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &OtpEmail) -> Result<(), OtpServiceError>;
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
