//! Database connection management.
//!
//! [`Database`] stores only the path to the SQLite file.  Each operation
//! opens a fresh [`rusqlite::Connection`] and drops it when the call
//! returns, on success and error paths alike, so no lock or descriptor is
//! held across requests.  Concurrent writers are serialized by SQLite's own
//! file-level locking.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::Connection;

use crate::error::Result;
use crate::schema;

/// Handle to the submissions database.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Open (or create) the database at `path` and ensure the schema exists.
    ///
    /// Safe to call on every process start: the schema is applied with
    /// `CREATE TABLE IF NOT EXISTS` and never drops or alters existing rows.
    pub fn open_at(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        tracing::info!(path = %path.display(), "opening submissions database");

        let db = Self {
            path: path.to_path_buf(),
        };

        // Scoped connection: applies the schema, then drops.
        let conn = db.connect()?;
        schema::ensure_schema(&conn)?;

        Ok(db)
    }

    /// Open a connection for a single operation.
    ///
    /// WAL keeps readers unblocked during writes; the busy timeout covers
    /// write-lock contention between per-request connections.
    pub(crate) fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(conn)
    }

    /// Return the filesystem path of the database.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
