use chrono::{Duration, Utc};
use rand::RngExt;

use crate::domain::repository::{MailerPort, OtpStore};
use crate::domain::types::{MailMessage, OTP_TTL_SECS, OtpEntry};
use crate::error::AuthServiceError;

/// Generate a 4-digit login code, uniform over 1000–9999.
fn generate_code() -> String {
    let mut rng = rand::rng();
    rng.random_range(1000..10000).to_string()
}

fn otp_email_html(code: &str) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <h1 style="text-align: center;">Admin Login Verification</h1>
  <p style="font-size: 16px;">Your verification code is:</p>
  <div style="background: #f0f0f0; padding: 20px; border-radius: 8px; text-align: center;">
    <h2 style="font-size: 32px; letter-spacing: 5px; margin: 0;">{code}</h2>
  </div>
  <p style="font-size: 14px; color: #666;">This code will expire in 10 minutes.</p>
  <p style="font-size: 12px; color: #999;">If you didn't request this code, please ignore this email.</p>
</div>"#
    )
}

fn otp_email_text(code: &str) -> String {
    format!(
        "Admin Login Verification Code\n\n\
         Your verification code is: {code}\n\n\
         This code will expire in 10 minutes.\n\n\
         If you didn't request this code, please ignore this email."
    )
}

pub struct RequestCodeInput {
    pub email: String,
}

pub struct RequestCodeUseCase<O, M>
where
    O: OtpStore,
    M: MailerPort,
{
    pub otp_store: O,
    pub mailer: M,
    pub admin_email: String,
    pub sender_name: String,
    pub sender_email: String,
}

impl<O, M> RequestCodeUseCase<O, M>
where
    O: OtpStore,
    M: MailerPort,
{
    pub async fn execute(&self, input: RequestCodeInput) -> Result<(), AuthServiceError> {
        // 1. Only the configured administrator may request a code. Anything
        //    else fails before a code is generated or sent.
        if input.email != self.admin_email {
            return Err(AuthServiceError::Unauthorized);
        }

        // 2. Generate and store the code. A re-request replaces any pending
        //    entry wholesale.
        let code = generate_code();
        let entry = OtpEntry {
            identity: input.email.clone(),
            code: code.clone(),
            expires_at: Utc::now() + Duration::seconds(OTP_TTL_SECS),
            attempts: 0,
        };
        self.otp_store.put(entry).await?;

        // 3. Deliver. A failed send does not roll back the store write: an
        //    undelivered code is harmless and the next request overwrites it.
        let message = MailMessage {
            sender_name: self.sender_name.clone(),
            sender_email: self.sender_email.clone(),
            recipient: input.email.clone(),
            subject: "Admin Login Verification Code".to_owned(),
            html_body: otp_email_html(&code),
            text_body: otp_email_text(&code),
        };
        self.mailer.send(&message).await?;
        Ok(())
    }
}
