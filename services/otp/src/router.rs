use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use wof_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    admin::check_admin,
    health::{healthz, readyz},
    otp::{issue_otp, verify_otp},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // OTP
        .route("/auth/otp", post(issue_otp).put(verify_otp))
        // Admin
        .route("/auth/check-admin", post(check_admin))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
