use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::OtpServiceError;
use crate::handlers::extract::JsonBody;
use crate::state::AppState;
use crate::usecase::issue::{IssueOtpInput, IssueOtpUseCase};
use crate::usecase::verify::{VerifyOtpInput, VerifyOtpUseCase};

// ── POST /auth/otp ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct IssueOtpRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Serialize)]
pub struct IssueOtpResponse {
    pub success: bool,
    pub message: &'static str,
    pub expires_at: DateTime<Utc>,
}

pub async fn issue_otp(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<IssueOtpRequest>,
) -> Result<Json<IssueOtpResponse>, OtpServiceError> {
    let usecase = IssueOtpUseCase {
        otps: state.otp_repo(),
        mailer: state.mailer.clone(),
        clock: state.clock(),
    };
    let out = usecase
        .execute(IssueOtpInput { email: body.email })
        .await?;
    Ok(Json(IssueOtpResponse {
        success: true,
        message: out.message,
        expires_at: out.expires_at,
    }))
}

// ── PUT /auth/otp ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyOtpRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub otp: String,
}

#[derive(Serialize)]
pub struct VerifyOtpResponse {
    pub success: bool,
    pub message: &'static str,
    pub token: String,
}

pub async fn verify_otp(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<VerifyOtpRequest>,
) -> Result<Json<VerifyOtpResponse>, OtpServiceError> {
    let usecase = VerifyOtpUseCase {
        otps: state.otp_repo(),
        clock: state.clock(),
        session_secret: state.session_secret.clone(),
    };
    let out = usecase
        .execute(VerifyOtpInput {
            email: body.email,
            otp: body.otp,
        })
        .await?;
    Ok(Json(VerifyOtpResponse {
        success: true,
        message: out.message,
        token: out.token,
    }))
}
