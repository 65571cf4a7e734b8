use axum::http::StatusCode;
use axum_extra::extract::cookie::Cookie;
use axum_test::TestServer;
use serde_json::{Value, json};

use porchlight_auth::domain::repository::OtpStore;
use porchlight_auth::router::build_router;
use porchlight_auth_types::cookie::ADMIN_SESSION;

use crate::helpers::{ADMIN_EMAIL, MailOutcome, MockMailer, test_state};

#[tokio::test]
async fn should_serve_health_endpoints() {
    let server = TestServer::new(build_router(test_state(MockMailer::accepting()))).unwrap();

    server.get("/healthz").await.assert_status_ok();
    server.get("/readyz").await.assert_status_ok();
}

#[tokio::test]
async fn should_complete_the_full_login_flow() {
    let state = test_state(MockMailer::accepting());
    let otp_store = state.otp_store.clone();
    let mut server = TestServer::new(build_router(state)).unwrap();
    server.save_cookies();

    // Request a code for the admin.
    let response = server.post("/auth/code").json(&json!({ "email": ADMIN_EMAIL })).await;
    response.assert_status(StatusCode::CREATED);

    let entry = otp_store.get(ADMIN_EMAIL).await.unwrap().expect("code stored");
    assert_eq!(entry.code.len(), 4);
    assert!(entry.code.chars().all(|c| c.is_ascii_digit()));

    // Exchange it for a session.
    let response = server
        .post("/auth/session")
        .json(&json!({ "email": ADMIN_EMAIL, "code": entry.code }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    let token = body["token"].as_str().expect("token in body");
    assert!(!token.is_empty());
    assert_eq!(response.cookie(ADMIN_SESSION).value(), token);

    // One-time use: the entry is gone.
    assert!(otp_store.get(ADMIN_EMAIL).await.unwrap().is_none());

    // The saved cookie authenticates follow-up requests.
    let response = server.get("/auth/session").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "authenticated": true }));

    // Logout revokes the session and clears the cookie.
    server.delete("/auth/session").await.assert_status(StatusCode::NO_CONTENT);
    server
        .get("/auth/session")
        .await
        .assert_json(&json!({ "authenticated": false }));
}

#[tokio::test]
async fn should_reject_unknown_email_with_unauthorized_kind() {
    let server = TestServer::new(build_router(test_state(MockMailer::accepting()))).unwrap();

    let response = server
        .post("/auth/code")
        .json(&json!({ "email": "intruder@example.com" }))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);

    let body: Value = response.json();
    assert_eq!(body["kind"], "UNAUTHORIZED");
}

#[tokio::test]
async fn should_report_delivery_failure_with_hint_and_keep_the_code() {
    let state = test_state(MockMailer::with_outcome(MailOutcome::RejectAuthentication));
    let otp_store = state.otp_store.clone();
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server.post("/auth/code").json(&json!({ "email": ADMIN_EMAIL })).await;
    response.assert_status(StatusCode::BAD_GATEWAY);

    let body: Value = response.json();
    assert_eq!(body["kind"], "EMAIL_DELIVERY_FAILED");
    assert_eq!(body["hint"], "check the mail provider API key configuration");

    // No rollback on delivery failure.
    assert!(otp_store.get(ADMIN_EMAIL).await.unwrap().is_some());
}

#[tokio::test]
async fn should_reject_malformed_bodies_as_bad_request() {
    let server = TestServer::new(build_router(test_state(MockMailer::accepting()))).unwrap();

    let response = server.post("/auth/session").text("definitely not json").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["kind"], "BAD_REQUEST");
}

#[tokio::test]
async fn should_answer_false_without_a_session_cookie() {
    let server = TestServer::new(build_router(test_state(MockMailer::accepting()))).unwrap();

    let response = server.get("/auth/session").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "authenticated": false }));
}

#[tokio::test]
async fn should_answer_false_for_a_forged_cookie() {
    let mut server = TestServer::new(build_router(test_state(MockMailer::accepting()))).unwrap();
    server.save_cookies();

    server.add_cookie(Cookie::new(ADMIN_SESSION, "forged-token"));
    server
        .get("/auth/session")
        .await
        .assert_json(&json!({ "authenticated": false }));
}
