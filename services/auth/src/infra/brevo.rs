//! Brevo transactional-email client.
//!
//! Thin port implementation over `POST /v3/smtp/email`. The interesting part
//! is failure categorization: the provider's error payloads are mapped to
//! [`MailError`] categories so the boundary can surface remediation hints.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::repository::MailerPort;
use crate::domain::types::MailMessage;
use crate::error::MailError;

const BREVO_SEND_URL: &str = "https://api.brevo.com/v3/smtp/email";

/// Outbound calls must not hang a login request indefinitely.
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct Party<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
struct Recipient<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    sender: Party<'a>,
    to: Vec<Recipient<'a>>,
    subject: &'a str,
    #[serde(rename = "htmlContent")]
    html_content: &'a str,
    #[serde(rename = "textContent")]
    text_content: &'a str,
}

#[derive(Deserialize, Default)]
struct ProviderError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

#[derive(Clone)]
pub struct BrevoMailer {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl BrevoMailer {
    /// Build the client. A missing API key is not a startup error — sends
    /// short-circuit with [`MailError::NotConfigured`] instead, so the rest
    /// of the service stays usable.
    pub fn new(api_key: Option<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(SEND_TIMEOUT).build()?;
        Ok(Self { client, api_key })
    }
}

impl MailerPort for BrevoMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        let Some(api_key) = &self.api_key else {
            return Err(MailError::NotConfigured);
        };

        let payload = SendEmailRequest {
            sender: Party {
                name: &message.sender_name,
                email: &message.sender_email,
            },
            to: vec![Recipient {
                email: &message.recipient,
            }],
            subject: &message.subject,
            html_content: &message.html_body,
            text_content: &message.text_body,
        };

        let response = self
            .client
            .post(BREVO_SEND_URL)
            .header("api-key", api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| MailError::Transport(e.into()))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(recipient = %message.recipient, "provider accepted message");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(categorize_failure(status, &body))
    }
}

/// Map a provider error response to a [`MailError`] category.
///
/// Matching mirrors the provider's observed payloads: credential problems
/// come back as 401/403, unauthorized source addresses as
/// `code = "unauthorized"` or an "IP address" message, and unverified
/// senders as messages naming the sender/email.
fn categorize_failure(status: StatusCode, body: &str) -> MailError {
    let error: ProviderError = serde_json::from_str(body).unwrap_or_else(|_| ProviderError {
        code: String::new(),
        message: body.to_owned(),
    });

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return MailError::Authentication;
    }
    if error.code == "unauthorized" || error.message.contains("IP address") {
        return MailError::OriginDenied;
    }
    if error.message.contains("sender") || error.message.contains("email") {
        return MailError::SenderUnverified;
    }

    let detail = if error.message.is_empty() {
        status.to_string()
    } else {
        format!("{status}: {}", error.message)
    };
    MailError::Transport(anyhow::anyhow!("{detail}"))
}
