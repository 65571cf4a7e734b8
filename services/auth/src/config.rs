/// Auth service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AuthConfig {
    /// Administrator email address — the only identity allowed to log in.
    pub admin_email: String,
    /// Verified sender address for outbound verification emails.
    pub sender_email: String,
    /// Display name on outbound verification emails. Env var: `SENDER_NAME`.
    pub sender_name: String,
    /// Brevo API key. When absent, code requests fail with `NOT_CONFIGURED`
    /// instead of attempting a send.
    pub brevo_api_key: Option<String>,
    /// TCP port to listen on (default 3100). Env var: `AUTH_PORT`.
    pub auth_port: u16,
    /// Whether the session cookie carries the Secure attribute (default
    /// true; disable for plain-HTTP local development). Env var:
    /// `COOKIE_SECURE`.
    pub cookie_secure: bool,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            admin_email: std::env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL"),
            sender_email: std::env::var("SENDER_EMAIL").expect("SENDER_EMAIL"),
            sender_name: std::env::var("SENDER_NAME").unwrap_or_else(|_| "Blog Admin".to_owned()),
            brevo_api_key: std::env::var("BREVO_API_KEY").ok(),
            auth_port: std::env::var("AUTH_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3100),
            cookie_secure: std::env::var("COOKIE_SECURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}
