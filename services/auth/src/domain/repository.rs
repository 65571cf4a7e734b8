#![allow(async_fn_in_trait)]

use std::future::Future;

use crate::domain::types::{MailMessage, OtpEntry};
use crate::error::{AuthServiceError, MailError};

/// Store for pending one-time passcodes, keyed by identity.
///
/// Implementations are injected into the usecases so tests control state
/// and a multi-instance deployment can swap in a shared external store.
pub trait OtpStore: Send + Sync {
    /// Insert or replace the entry for `entry.identity`.
    async fn put(&self, entry: OtpEntry) -> Result<(), AuthServiceError>;

    /// Look up the entry for an identity. Does not expire entries.
    async fn get(&self, identity: &str) -> Result<Option<OtpEntry>, AuthServiceError>;

    /// Remove the entry for an identity, if present. Idempotent.
    async fn delete(&self, identity: &str) -> Result<(), AuthServiceError>;
}

/// Store for active sessions, keyed by opaque token.
pub trait SessionStore: Send + Sync {
    /// Mint a session for an identity and return its token.
    async fn create(&self, identity: &str) -> Result<String, AuthServiceError>;

    /// Whether the token denotes a live session. Unknown, malformed, and
    /// expired tokens all yield `false`; this never errors on bad input.
    async fn verify(&self, token: &str) -> Result<bool, AuthServiceError>;

    /// Remove a session, if present. Idempotent.
    async fn revoke(&self, token: &str) -> Result<(), AuthServiceError>;
}

/// Port for the hosted transactional-email provider.
///
/// Declared with an explicit `Send` future (not `async fn`) because handlers
/// stay generic over the mailer; implementations still write `async fn`.
pub trait MailerPort: Send + Sync {
    fn send(
        &self,
        message: &MailMessage,
    ) -> impl Future<Output = Result<(), MailError>> + Send;
}
