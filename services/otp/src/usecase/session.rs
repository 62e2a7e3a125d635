use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use crate::domain::types::SESSION_TOKEN_TTL_SECS;
use crate::error::OtpServiceError;

/// Claims of the session token issued after a successful OTP check. The page
/// gate reads `email` to decide which areas the holder may enter.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub email: String,
    pub exp: u64,
}

pub fn issue_session_token(
    email: &str,
    secret: &str,
    now: DateTime<Utc>,
) -> Result<String, OtpServiceError> {
    let exp = (now + Duration::seconds(SESSION_TOKEN_TTL_SECS)).timestamp();
    let claims = SessionClaims {
        email: email.to_owned(),
        exp: u64::try_from(exp).map_err(|_| anyhow::anyhow!("token expiry before epoch"))?,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| OtpServiceError::Internal(e.into()))
}
