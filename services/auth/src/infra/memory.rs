//! In-memory store implementations.
//!
//! State is process-local by design: the deployment is a single instance and
//! sessions are expected to die with the process. Multi-instance deployments
//! need a shared external store behind the same traits.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use rand::RngExt;

use crate::domain::repository::{OtpStore, SessionStore};
use crate::domain::types::{OtpEntry, SESSION_TOKEN_BYTES, SESSION_TTL_SECS, SessionEntry};
use crate::error::AuthServiceError;

/// How often the background sweeper purges expired entries.
const SWEEP_INTERVAL: Duration = Duration::from_secs(300);

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, AuthServiceError> {
    mutex
        .lock()
        .map_err(|_| AuthServiceError::Internal(anyhow::anyhow!("store mutex poisoned")))
}

/// Generate an opaque session token: 256 random bits, URL-safe base64.
///
/// `rand::rng()` is a CSPRNG, so tokens are unguessable; the raw value is
/// only ever held by the client and this process.
fn generate_token() -> String {
    let bytes: [u8; SESSION_TOKEN_BYTES] = rand::rng().random();
    URL_SAFE_NO_PAD.encode(bytes)
}

// ── OTP store ────────────────────────────────────────────────────────────────

/// Pending passcodes keyed by identity. Each operation is a single
/// non-yielding critical section.
#[derive(Clone, Default)]
pub struct InMemoryOtpStore {
    entries: Arc<Mutex<HashMap<String, OtpEntry>>>,
}

impl InMemoryOtpStore {
    /// Drop expired entries, returning how many were removed.
    pub fn purge_expired(&self) -> Result<usize, AuthServiceError> {
        let mut entries = lock(&self.entries)?;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        Ok(before - entries.len())
    }
}

impl OtpStore for InMemoryOtpStore {
    async fn put(&self, entry: OtpEntry) -> Result<(), AuthServiceError> {
        lock(&self.entries)?.insert(entry.identity.clone(), entry);
        Ok(())
    }

    async fn get(&self, identity: &str) -> Result<Option<OtpEntry>, AuthServiceError> {
        Ok(lock(&self.entries)?.get(identity).cloned())
    }

    async fn delete(&self, identity: &str) -> Result<(), AuthServiceError> {
        lock(&self.entries)?.remove(identity);
        Ok(())
    }
}

// ── Session store ────────────────────────────────────────────────────────────

/// Active sessions keyed by token, with a server-side TTL enforced
/// independently of the cookie Max-Age.
#[derive(Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<Mutex<HashMap<String, SessionEntry>>>,
    ttl_secs: i64,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::with_ttl(SESSION_TTL_SECS)
    }
}

impl InMemorySessionStore {
    /// Store with a custom session TTL in seconds.
    pub fn with_ttl(ttl_secs: i64) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            ttl_secs,
        }
    }

    /// Drop expired sessions, returning how many were removed.
    pub fn purge_expired(&self) -> Result<usize, AuthServiceError> {
        let mut sessions = lock(&self.sessions)?;
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_expired());
        Ok(before - sessions.len())
    }
}

impl SessionStore for InMemorySessionStore {
    async fn create(&self, identity: &str) -> Result<String, AuthServiceError> {
        let now = Utc::now();
        let mut sessions = lock(&self.sessions)?;
        // Collision on 256 random bits should not happen; retry a few times
        // rather than silently replacing another identity's session.
        for _ in 0..3 {
            let token = generate_token();
            if sessions.contains_key(&token) {
                continue;
            }
            sessions.insert(
                token.clone(),
                SessionEntry {
                    token: token.clone(),
                    identity: identity.to_owned(),
                    issued_at: now,
                    expires_at: now + chrono::Duration::seconds(self.ttl_secs),
                },
            );
            return Ok(token);
        }
        Err(AuthServiceError::Internal(anyhow::anyhow!(
            "failed to generate unique session token"
        )))
    }

    async fn verify(&self, token: &str) -> Result<bool, AuthServiceError> {
        let mut sessions = lock(&self.sessions)?;
        match sessions.get(token) {
            None => Ok(false),
            Some(entry) if entry.is_expired() => {
                sessions.remove(token);
                Ok(false)
            }
            Some(_) => Ok(true),
        }
    }

    async fn revoke(&self, token: &str) -> Result<(), AuthServiceError> {
        lock(&self.sessions)?.remove(token);
        Ok(())
    }
}

// ── Expiry sweeper ───────────────────────────────────────────────────────────

/// Spawn a background task that periodically purges expired passcodes and
/// sessions. Verification paths already purge on detection; the sweeper keeps
/// abandoned entries from accumulating.
pub fn spawn_expiry_sweeper(
    otp_store: InMemoryOtpStore,
    sessions: InMemorySessionStore,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(SWEEP_INTERVAL).await;
            match (otp_store.purge_expired(), sessions.purge_expired()) {
                (Ok(codes), Ok(purged_sessions)) => {
                    if codes + purged_sessions > 0 {
                        tracing::debug!(codes, sessions = purged_sessions, "purged expired entries");
                    }
                }
                (Err(e), _) | (_, Err(e)) => {
                    tracing::error!(error = %e, "expiry sweep failed");
                }
            }
        }
    })
}
