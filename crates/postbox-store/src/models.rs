//! Domain model persisted in the submissions database.
//!
//! [`Submission`] derives `Serialize` so it can be handed directly to the
//! HTTP layer as a response payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single contact-form submission.
///
/// Rows are write-once: the store assigns `id` and `timestamp` at insert
/// time and nothing ever mutates or deletes them afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Submission {
    /// Store-assigned rowid, unique and strictly increasing in insertion order.
    pub id: i64,
    /// Submitter's name (trimmed, at least 2 characters).
    pub name: String,
    /// Submitter's email address.
    pub email: String,
    /// Message body (trimmed, at least 10 characters).
    pub message: String,
    /// Insertion time, assigned by the store clock.
    pub timestamp: DateTime<Utc>,
}
