use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
use serde_json::{Value, json};
use uuid::Uuid;

use wof_otp::infra::mail::HttpMailer;
use wof_otp::router::build_router;
use wof_otp::state::AppState;
use wof_otp_schema::otps;

use crate::helpers::{TEST_EMAIL, TEST_SESSION_SECRET, decode_session_token};

fn server_with(db: DatabaseConnection) -> TestServer {
    let state = AppState {
        db: Arc::new(db),
        // Unroutable: none of these tests reach the mail step.
        mailer: HttpMailer::new("http://127.0.0.1:9", "test-key".into(), "send@example.com".into()),
        session_secret: TEST_SESSION_SECRET.to_owned(),
        allowed_admins: Arc::from(vec!["vedic.229302083".to_owned()]),
    };
    TestServer::new(build_router(state)).unwrap()
}

fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

fn active_model(code: &str) -> otps::Model {
    let now = Utc::now();
    otps::Model {
        id: Uuid::new_v4(),
        email: TEST_EMAIL.to_owned(),
        code: code.to_owned(),
        created_at: now,
        expires_at: now + Duration::minutes(5),
        used: false,
    }
}

#[tokio::test]
async fn healthz_returns_200_with_request_id() {
    let server = server_with(empty_db());

    let resp = server.get("/healthz").await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    let id = resp
        .headers()
        .get("x-request-id")
        .expect("x-request-id header")
        .to_str()
        .unwrap()
        .to_owned();
    assert!(Uuid::parse_str(&id).is_ok(), "request id {id} is not a uuid");
}

#[tokio::test]
async fn readyz_returns_200_when_store_answers() {
    let server = server_with(empty_db());

    let resp = server.get("/readyz").await;

    assert_eq!(resp.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn readyz_returns_503_when_store_is_unreachable() {
    let server = server_with(DatabaseConnection::Disconnected);

    let resp = server.get("/readyz").await;

    assert_eq!(resp.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn issue_rejects_malformed_email_with_400() {
    let server = server_with(empty_db());

    let resp = server
        .post("/auth/otp")
        .json(&json!({ "email": "not-an-email" }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["kind"], "INVALID_EMAIL");
    assert_eq!(body["message"], "Invalid email address");
}

#[tokio::test]
async fn issue_rejects_missing_email_with_400() {
    let server = server_with(empty_db());

    let resp = server.post("/auth/otp").json(&json!({})).await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "INVALID_EMAIL");
}

#[tokio::test]
async fn issue_rejects_null_email_with_json_400() {
    let server = server_with(empty_db());

    let resp = server.post("/auth/otp").json(&json!({ "email": null })).await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["kind"], "INVALID_BODY");
    assert_eq!(body["message"], "Invalid request body");
}

#[tokio::test]
async fn issue_rejects_non_json_body_with_json_400() {
    let server = server_with(empty_db());

    let resp = server.post("/auth/otp").text("email=user@example.com").await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["kind"], "INVALID_BODY");
}

#[tokio::test]
async fn issue_rejects_truncated_json_with_json_400() {
    let server = server_with(empty_db());

    let resp = server
        .post("/auth/otp")
        .text(r#"{"email":"#)
        .content_type("application/json")
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "INVALID_BODY");
}

#[tokio::test]
async fn verify_rejects_numeric_code_with_json_400() {
    let server = server_with(empty_db());

    let resp = server
        .put("/auth/otp")
        .json(&json!({ "email": TEST_EMAIL, "otp": 123456 }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["kind"], "INVALID_BODY");
    assert_eq!(body["message"], "Invalid request body");
}

#[tokio::test]
async fn verify_rejects_missing_code_with_400() {
    let server = server_with(empty_db());

    let resp = server
        .put("/auth/otp")
        .json(&json!({ "email": TEST_EMAIL }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["kind"], "MISSING_CODE");
}

#[tokio::test]
async fn verify_without_matching_record_returns_generic_failure() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<otps::Model>::new()])
        .into_connection();
    let server = server_with(db);

    let resp = server
        .put("/auth/otp")
        .json(&json!({ "email": TEST_EMAIL, "otp": "123456" }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["kind"], "INVALID_OTP");
    assert_eq!(body["message"], "Invalid or expired OTP");
}

#[tokio::test]
async fn verify_with_matching_record_returns_session_token() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![active_model("123456")]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    let server = server_with(db);

    let resp = server
        .put("/auth/otp")
        .json(&json!({ "email": TEST_EMAIL, "otp": "123456" }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    let body: Value = resp.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "OTP verified successfully");
    let token = body["token"].as_str().expect("token string");
    let claims = decode_session_token(token, TEST_SESSION_SECRET);
    assert_eq!(claims.email, TEST_EMAIL);
}

#[tokio::test]
async fn verify_losing_the_consume_race_returns_generic_failure() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![active_model("123456")]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();
    let server = server_with(db);

    let resp = server
        .put("/auth/otp")
        .json(&json!({ "email": TEST_EMAIL, "otp": "123456" }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "INVALID_OTP");
}

#[tokio::test]
async fn check_admin_matches_username_against_allow_list() {
    let server = server_with(empty_db());

    let admin = server
        .post("/auth/check-admin")
        .json(&json!({ "email": "vedic.229302083@muj.manipal.edu" }))
        .await;
    assert_eq!(admin.status_code(), StatusCode::OK);
    let body: Value = admin.json();
    assert_eq!(body["isAdmin"], true);
    assert!(body.get("is_admin").is_none());

    let student = server
        .post("/auth/check-admin")
        .json(&json!({ "email": "someone@muj.manipal.edu" }))
        .await;
    assert_eq!(student.json::<Value>()["isAdmin"], false);
}

#[tokio::test]
async fn check_admin_rejects_mistyped_email_with_json_400() {
    let server = server_with(empty_db());

    let resp = server
        .post("/auth/check-admin")
        .json(&json!({ "email": ["vedic.229302083@muj.manipal.edu"] }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["kind"], "INVALID_BODY");
}
