use crate::domain::repository::{OtpStore, SessionStore};
use crate::domain::types::{MAX_VERIFY_ATTEMPTS, OtpEntry};
use crate::error::AuthServiceError;

pub struct VerifyCodeInput {
    pub email: String,
    pub code: String,
}

#[derive(Debug)]
pub struct VerifyCodeOutput {
    pub token: String,
}

pub struct VerifyCodeUseCase<O, S>
where
    O: OtpStore,
    S: SessionStore,
{
    pub otp_store: O,
    pub sessions: S,
    pub admin_email: String,
}

impl<O, S> VerifyCodeUseCase<O, S>
where
    O: OtpStore,
    S: SessionStore,
{
    pub async fn execute(
        &self,
        input: VerifyCodeInput,
    ) -> Result<VerifyCodeOutput, AuthServiceError> {
        // 1. Both fields are required.
        if input.email.is_empty() || input.code.is_empty() {
            return Err(AuthServiceError::BadRequest);
        }

        // 2. Same identity gate as the request path.
        if input.email != self.admin_email {
            return Err(AuthServiceError::Unauthorized);
        }

        // 3. A code must have been requested first.
        let Some(entry) = self.otp_store.get(&input.email).await? else {
            return Err(AuthServiceError::NotFound);
        };

        // 4. Expiry consumes the entry; the next attempt sees NotFound.
        if entry.is_expired() {
            self.otp_store.delete(&input.email).await?;
            return Err(AuthServiceError::Expired);
        }

        // 5. Mismatch records the attempt. The entry survives until the cap
        //    so the admin can correct a typo, then is consumed.
        if entry.code != input.code {
            let attempts = entry.attempts + 1;
            if attempts >= MAX_VERIFY_ATTEMPTS {
                self.otp_store.delete(&input.email).await?;
                return Err(AuthServiceError::TooManyAttempts);
            }
            self.otp_store.put(OtpEntry { attempts, ..entry }).await?;
            return Err(AuthServiceError::InvalidCode);
        }

        // 6. One-time use: consume the code, then mint the session.
        self.otp_store.delete(&input.email).await?;
        let token = self.sessions.create(&input.email).await?;
        Ok(VerifyCodeOutput { token })
    }
}
