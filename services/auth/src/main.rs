use tracing::info;

use porchlight_auth::config::AuthConfig;
use porchlight_auth::infra::brevo::BrevoMailer;
use porchlight_auth::infra::memory::{
    InMemoryOtpStore, InMemorySessionStore, spawn_expiry_sweeper,
};
use porchlight_auth::router::build_router;
use porchlight_auth::state::AppState;

#[tokio::main]
async fn main() {
    porchlight_core::tracing::init_tracing();

    let config = AuthConfig::from_env();

    let mailer =
        BrevoMailer::new(config.brevo_api_key.clone()).expect("failed to build mail client");
    let otp_store = InMemoryOtpStore::default();
    let sessions = InMemorySessionStore::default();
    spawn_expiry_sweeper(otp_store.clone(), sessions.clone());

    let state = AppState {
        otp_store,
        sessions,
        mailer,
        admin_email: config.admin_email,
        sender_name: config.sender_name,
        sender_email: config.sender_email,
        cookie_secure: config.cookie_secure,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.auth_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("auth service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
