//! Mail transport configuration loaded from environment variables.
//!
//! Credentials are required: without `MAIL_USERNAME` and `MAIL_PASSWORD`
//! there is nothing useful to configure, and [`MailConfig::from_env`]
//! returns `None` so the server can run with notifications disabled.

/// SMTP settings for the notification mailer.
#[derive(Clone)]
pub struct MailConfig {
    /// SMTP relay hostname.
    /// Env: `MAIL_SERVER`
    /// Default: `smtp.gmail.com`
    pub smtp_host: String,

    /// SMTP submission port (STARTTLS).
    /// Env: `MAIL_PORT`
    /// Default: `587`
    pub smtp_port: u16,

    /// SMTP username.
    /// Env: `MAIL_USERNAME` (required)
    pub username: String,

    /// SMTP password.
    /// Env: `MAIL_PASSWORD` (required)
    pub password: String,

    /// Sender address for notification emails.
    /// Env: `MAIL_SENDER`
    /// Default: the username.
    pub sender: String,

    /// Fixed operator address that receives every notification.
    /// Env: `MAIL_RECIPIENT`
    /// Default: the username.
    pub recipient: String,
}

impl MailConfig {
    /// Load mail settings from environment variables.
    ///
    /// Returns `None` when the required credentials are absent.
    pub fn from_env() -> Option<Self> {
        let username = std::env::var("MAIL_USERNAME").ok()?;
        let password = std::env::var("MAIL_PASSWORD").ok()?;

        let smtp_host =
            std::env::var("MAIL_SERVER").unwrap_or_else(|_| "smtp.gmail.com".to_string());

        let smtp_port = match std::env::var("MAIL_PORT") {
            Ok(raw) => match raw.parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    tracing::warn!(value = %raw, "Invalid MAIL_PORT, using default 587");
                    587
                }
            },
            Err(_) => 587,
        };

        let sender = std::env::var("MAIL_SENDER").unwrap_or_else(|_| username.clone());
        let recipient = std::env::var("MAIL_RECIPIENT").unwrap_or_else(|_| username.clone());

        Some(Self {
            smtp_host,
            smtp_port,
            username,
            password,
            sender,
            recipient,
        })
    }
}

// Manual impl so the password never ends up in logs.
impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("sender", &self.sender)
            .field("recipient", &self.recipient)
            .finish()
    }
}
