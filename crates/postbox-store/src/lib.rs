//! # postbox-store
//!
//! SQLite persistence for contact-form submissions.
//!
//! The crate exposes a [`Database`] handle that remembers only the database
//! *path*: every operation opens its own `rusqlite::Connection` and releases
//! it when the call returns, so no lock or file descriptor outlives a single
//! request.  Submissions are write-once -- there is no update or delete.

pub mod database;
pub mod models;
pub mod schema;
pub mod submissions;

mod error;

pub use database::Database;
pub use error::StoreError;
pub use models::Submission;
