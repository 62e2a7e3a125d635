use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::OtpServiceError;
use crate::handlers::extract::JsonBody;
use crate::state::AppState;
use crate::usecase::admin::CheckAdminUseCase;

#[derive(Deserialize)]
pub struct CheckAdminRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Serialize)]
pub struct CheckAdminResponse {
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

pub async fn check_admin(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CheckAdminRequest>,
) -> Result<Json<CheckAdminResponse>, OtpServiceError> {
    let usecase = CheckAdminUseCase {
        allowed_admins: &state.allowed_admins,
    };
    Ok(Json(CheckAdminResponse {
        is_admin: usecase.execute(&body.email),
    }))
}
