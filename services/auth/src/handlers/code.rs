use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;

use crate::domain::repository::MailerPort;
use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::request_code::{RequestCodeInput, RequestCodeUseCase};

#[derive(Deserialize)]
pub struct RequestCodeRequest {
    #[serde(default)]
    pub email: String,
}

pub async fn request_code<M>(
    State(state): State<AppState<M>>,
    body: Result<Json<RequestCodeRequest>, JsonRejection>,
) -> Result<StatusCode, AuthServiceError>
where
    M: MailerPort + Clone,
{
    let Json(body) = body.map_err(|_| AuthServiceError::BadRequest)?;
    let usecase = RequestCodeUseCase {
        otp_store: state.otp_store.clone(),
        mailer: state.mailer.clone(),
        admin_email: state.admin_email.clone(),
        sender_name: state.sender_name.clone(),
        sender_email: state.sender_email.clone(),
    };
    usecase
        .execute(RequestCodeInput { email: body.email })
        .await?;
    Ok(StatusCode::CREATED)
}
