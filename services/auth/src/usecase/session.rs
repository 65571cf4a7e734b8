use crate::domain::repository::SessionStore;
use crate::error::AuthServiceError;

/// Decides whether a cookie value denotes a live session. An absent cookie
/// and an invalid token are the same answer; malformed input never errors.
pub struct CheckSessionUseCase<S: SessionStore> {
    pub sessions: S,
}

impl<S: SessionStore> CheckSessionUseCase<S> {
    pub async fn execute(&self, token: Option<&str>) -> Result<bool, AuthServiceError> {
        match token {
            None => Ok(false),
            Some(token) => self.sessions.verify(token).await,
        }
    }
}

/// Logout. Revoking an absent or unknown token is a no-op.
pub struct RevokeSessionUseCase<S: SessionStore> {
    pub sessions: S,
}

impl<S: SessionStore> RevokeSessionUseCase<S> {
    pub async fn execute(&self, token: Option<&str>) -> Result<(), AuthServiceError> {
        if let Some(token) = token {
            self.sessions.revoke(token).await?;
        }
        Ok(())
    }
}
