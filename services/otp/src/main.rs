use std::sync::Arc;
use std::time::Duration;

use sea_orm::Database;
use tracing::info;

use wof_core::tracing::init_tracing;
use wof_otp::config::OtpConfig;
use wof_otp::infra::mail::HttpMailer;
use wof_otp::router::build_router;
use wof_otp::state::AppState;
use wof_otp::sweeper::spawn_sweeper;
use wof_otp::usecase::sweep::SweepExpiredOtpsUseCase;

#[tokio::main]
async fn main() {
    init_tracing("info");

    let config = OtpConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let mailer = HttpMailer::new(
        &config.mail_api_url,
        config.mail_api_key.clone(),
        config.mail_from.clone(),
    );

    let state = AppState {
        db: Arc::new(db),
        mailer,
        session_secret: config.session_secret.clone(),
        allowed_admins: config.allowed_admins.clone().into(),
    };

    let sweep = SweepExpiredOtpsUseCase {
        otps: state.otp_repo(),
        clock: state.clock(),
    };
    spawn_sweeper(sweep, Duration::from_secs(config.sweep_interval_secs));

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.otp_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("otp service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
