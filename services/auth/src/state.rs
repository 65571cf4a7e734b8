use crate::domain::repository::MailerPort;
use crate::infra::memory::{InMemoryOtpStore, InMemorySessionStore};

/// Shared application state passed to every handler via axum `State`.
///
/// Stores and the mailer are injected at construction — there are no
/// process-wide globals. Generic over the mailer port so the full router can
/// be driven in tests against a mock provider.
#[derive(Clone)]
pub struct AppState<M>
where
    M: MailerPort + Clone,
{
    pub otp_store: InMemoryOtpStore,
    pub sessions: InMemorySessionStore,
    pub mailer: M,
    pub admin_email: String,
    pub sender_name: String,
    pub sender_email: String,
    pub cookie_secure: bool,
}
