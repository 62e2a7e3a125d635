use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// JSON error body shared by all services: `{ success: false, kind, message }`.
///
/// `kind` is a stable machine-readable tag; `message` is safe to show users.
pub fn error_response(status: StatusCode, kind: &'static str, message: &str) -> Response {
    let body = serde_json::json!({
        "success": false,
        "kind": kind,
        "message": message,
    });
    (status, axum::Json(body)).into_response()
}

/// Log a server-side failure with its full cause chain.
///
/// 4xx are expected client errors and tower-http's TraceLayer already records
/// the status line, so callers only invoke this for 5xx.
pub fn log_internal(kind: &'static str, error: &(dyn std::error::Error + 'static)) {
    let mut chain = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    tracing::error!(error = %chain, kind, "internal error");
}
