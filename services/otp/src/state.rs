use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::infra::clock::SystemClock;
use crate::infra::db::DbOtpRepository;
use crate::infra::mail::HttpMailer;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub mailer: HttpMailer,
    pub session_secret: String,
    pub allowed_admins: Arc<[String]>,
}

impl AppState {
    pub fn otp_repo(&self) -> DbOtpRepository {
        DbOtpRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn clock(&self) -> SystemClock {
        SystemClock
    }
}
