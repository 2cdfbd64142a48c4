//! SMTP notification sender.

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use crate::config::MailConfig;
use crate::error::NotifyError;

/// Sends contact notifications to the fixed operator address.
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl Mailer {
    /// Build a mailer from explicit configuration.
    ///
    /// Parses the sender/recipient addresses and assembles a STARTTLS
    /// relay; no connection is made until the first send.
    pub fn new(config: &MailConfig) -> Result<Self, NotifyError> {
        let from: Mailbox = config.sender.parse()?;
        let to: Mailbox = config.recipient.parse()?;

        let credentials = Credentials::new(config.username.clone(), config.password.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            transport,
            from,
            to,
        })
    }

    /// Attempt one delivery summarizing a submission.
    ///
    /// Exactly one attempt, no retry, no queueing: a failure is returned
    /// for the caller to log and swallow.
    pub async fn send(&self, name: &str, email: &str, message: &str) -> Result<(), NotifyError> {
        let mail = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject(name))
            .body(body(name, email, message))?;

        self.transport.send(mail).await?;

        debug!(to = %self.to, "Contact notification delivered");
        Ok(())
    }
}

/// Subject line for a submission notification.
fn subject(name: &str) -> String {
    format!("New Contact: {name}")
}

/// Plain-text body summarizing a submission.
fn body(name: &str, email: &str, message: &str) -> String {
    format!("Name: {name}\nEmail: {email}\nMessage: {message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> MailConfig {
        MailConfig {
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 587,
            username: "bakery@example.com".to_string(),
            password: "hunter2".to_string(),
            sender: "bakery@example.com".to_string(),
            recipient: "owner@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn builds_from_valid_config() {
        assert!(Mailer::new(&test_config()).is_ok());
    }

    #[test]
    fn rejects_unparseable_sender() {
        let mut config = test_config();
        config.sender = "not an address".to_string();
        assert!(matches!(Mailer::new(&config), Err(NotifyError::Address(_))));
    }

    #[test]
    fn notification_formatting() {
        assert_eq!(subject("Al"), "New Contact: Al");
        assert_eq!(
            body("Al", "a@b.com", "Hello there!"),
            "Name: Al\nEmail: a@b.com\nMessage: Hello there!"
        );
    }
}
