//! # postbox-notify
//!
//! Best-effort email notifications for contact-form submissions.
//!
//! A [`Mailer`] wraps a lettre SMTP transport configured once at startup
//! from an explicit [`MailConfig`].  Sends are single attempts: the caller
//! decides what to do with a failure, and the expected answer is "log it
//! and move on" -- delivery must never affect the fate of an already
//! persisted submission.

pub mod config;
pub mod mailer;

mod error;

pub use config::MailConfig;
pub use error::NotifyError;
pub use mailer::Mailer;
