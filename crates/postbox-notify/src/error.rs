use thiserror::Error;

/// Errors produced while building or using the SMTP mailer.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Sender or recipient address failed to parse.
    #[error("Invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The notification message could not be assembled.
    #[error("Email build error: {0}")]
    Build(#[from] lettre::error::Error),

    /// SMTP transport failure (connection, TLS, authentication, delivery).
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
