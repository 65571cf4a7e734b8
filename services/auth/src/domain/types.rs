use chrono::{DateTime, Utc};

/// Pending one-time passcode issued to an identity.
///
/// At most one live entry exists per identity; a re-request replaces the
/// entry wholesale, attempt counter included.
#[derive(Debug, Clone)]
pub struct OtpEntry {
    pub identity: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    /// Failed verification attempts recorded against this code.
    pub attempts: u32,
}

impl OtpEntry {
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Server-side session minted after a successful code verification.
#[derive(Debug, Clone)]
pub struct SessionEntry {
    pub token: String,
    pub identity: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionEntry {
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Outbound transactional email handed to the mail provider.
#[derive(Debug, Clone)]
pub struct MailMessage {
    pub sender_name: String,
    pub sender_email: String,
    pub recipient: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

/// One-time passcode time-to-live in seconds (10 minutes).
pub const OTP_TTL_SECS: i64 = 600;

/// Session time-to-live in seconds (24 hours). The cookie Max-Age matches.
pub const SESSION_TTL_SECS: i64 = 86_400;

/// Failed verification attempts allowed before the code is consumed.
pub const MAX_VERIFY_ATTEMPTS: u32 = 5;

/// Random bytes per session token (256 bits before base64 encoding).
pub const SESSION_TOKEN_BYTES: usize = 32;
