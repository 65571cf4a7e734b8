use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Mail delivery failure, categorized so the caller can surface a
/// provider-specific remediation hint for the cases an operator can fix.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("mail provider credentials are missing")]
    NotConfigured,
    #[error("mail provider rejected the API key")]
    Authentication,
    #[error("mail provider rejected the sending network address")]
    OriginDenied,
    #[error("sender address is not verified with the mail provider")]
    SenderUnverified,
    #[error("mail provider request failed: {0}")]
    Transport(#[source] anyhow::Error),
}

impl MailError {
    /// Actionable remediation hint for known provider error categories.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Authentication => Some("check the mail provider API key configuration"),
            Self::OriginDenied => {
                Some("authorize this server's IP address in the mail provider dashboard")
            }
            Self::SenderUnverified => {
                Some("verify the sender address in the mail provider dashboard")
            }
            Self::NotConfigured | Self::Transport(_) => None,
        }
    }
}

/// Auth service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("missing or malformed request body")]
    BadRequest,
    #[error("unauthorized email address")]
    Unauthorized,
    #[error("no verification code found")]
    NotFound,
    #[error("verification code has expired")]
    Expired,
    #[error("invalid verification code")]
    InvalidCode,
    #[error("too many failed attempts")]
    TooManyAttempts,
    #[error("email service is not configured")]
    NotConfigured,
    #[error("failed to send verification email: {0}")]
    EmailDeliveryFailed(#[source] MailError),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl From<MailError> for AuthServiceError {
    fn from(err: MailError) -> Self {
        match err {
            MailError::NotConfigured => Self::NotConfigured,
            other => Self::EmailDeliveryFailed(other),
        }
    }
}

impl AuthServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotFound => "NOT_FOUND",
            Self::Expired => "EXPIRED",
            Self::InvalidCode => "INVALID_CODE",
            Self::TooManyAttempts => "TOO_MANY_ATTEMPTS",
            Self::NotConfigured => "NOT_CONFIGURED",
            Self::EmailDeliveryFailed(_) => "EMAIL_DELIVERY_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Remediation hint included in the response body when the failure has
    /// a known, operator-fixable provider category.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::EmailDeliveryFailed(mail) => mail.hint(),
            _ => None,
        }
    }
}

impl IntoResponse for AuthServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Expired | Self::InvalidCode => StatusCode::UNAUTHORIZED,
            Self::TooManyAttempts => StatusCode::TOO_MANY_REQUESTS,
            Self::NotConfigured | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::EmailDeliveryFailed(_) => StatusCode::BAD_GATEWAY,
        };
        // Log 5xx only — tower-http TraceLayer already records method/uri/status
        // for all requests. 4xx are expected client errors; logging them here
        // would be noise. Server-side failures need the source chain logged so
        // the root cause is traceable.
        match &self {
            Self::Internal(e) => {
                tracing::error!(error = %e, kind = "INTERNAL", "internal error");
            }
            Self::EmailDeliveryFailed(e) => {
                tracing::error!(error = %e, kind = "EMAIL_DELIVERY_FAILED", "mail delivery failed");
            }
            _ => {}
        }
        let mut body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if let Some(hint) = self.hint() {
            body["hint"] = serde_json::Value::String(hint.to_owned());
        }
        (status, axum::Json(body)).into_response()
    }
}
