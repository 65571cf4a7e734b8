use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use porchlight_auth_types::cookie::{ADMIN_SESSION, clear_session_cookie, set_session_cookie};

use crate::domain::repository::MailerPort;
use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::session::{CheckSessionUseCase, RevokeSessionUseCase};
use crate::usecase::verify_code::{VerifyCodeInput, VerifyCodeUseCase};

// ── POST /auth/session ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Serialize)]
pub struct CreateSessionResponse {
    pub token: String,
}

pub async fn create_session<M>(
    State(state): State<AppState<M>>,
    jar: CookieJar,
    body: Result<Json<CreateSessionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AuthServiceError>
where
    M: MailerPort + Clone,
{
    let Json(body) = body.map_err(|_| AuthServiceError::BadRequest)?;
    let usecase = VerifyCodeUseCase {
        otp_store: state.otp_store.clone(),
        sessions: state.sessions.clone(),
        admin_email: state.admin_email.clone(),
    };
    let out = usecase
        .execute(VerifyCodeInput {
            email: body.email,
            code: body.code,
        })
        .await?;

    let jar = set_session_cookie(jar, out.token.clone(), state.cookie_secure);
    Ok((
        StatusCode::CREATED,
        jar,
        Json(CreateSessionResponse { token: out.token }),
    ))
}

// ── GET /auth/session ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CheckSessionResponse {
    pub authenticated: bool,
}

pub async fn check_session<M>(
    State(state): State<AppState<M>>,
    jar: CookieJar,
) -> Result<Json<CheckSessionResponse>, AuthServiceError>
where
    M: MailerPort + Clone,
{
    let token = jar.get(ADMIN_SESSION).map(|c| c.value().to_owned());
    let usecase = CheckSessionUseCase {
        sessions: state.sessions.clone(),
    };
    let authenticated = usecase.execute(token.as_deref()).await?;
    Ok(Json(CheckSessionResponse { authenticated }))
}

// ── DELETE /auth/session ──────────────────────────────────────────────────────

pub async fn revoke_session<M>(
    State(state): State<AppState<M>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AuthServiceError>
where
    M: MailerPort + Clone,
{
    let token = jar.get(ADMIN_SESSION).map(|c| c.value().to_owned());
    let usecase = RevokeSessionUseCase {
        sessions: state.sessions.clone(),
    };
    usecase.execute(token.as_deref()).await?;

    let jar = clear_session_cookie(jar, state.cookie_secure);
    Ok((StatusCode::NO_CONTENT, jar))
}
