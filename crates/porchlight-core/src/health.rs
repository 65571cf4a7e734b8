use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` — readiness check. State is process-local, so a
/// live process is a ready process; override per service if that changes.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
