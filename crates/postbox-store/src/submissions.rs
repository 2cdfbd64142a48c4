//! Insert and list operations for [`Submission`] rows.

use chrono::{DateTime, Utc};
use rusqlite::params;

use crate::database::Database;
use crate::error::Result;
use crate::models::Submission;

impl Database {
    /// Insert one submission and return the stored row.
    ///
    /// The timestamp comes from the store clock at insert time, never from
    /// the caller.  The insert is a single autocommit statement, so readers
    /// never observe a partial row.
    pub fn save(&self, name: &str, email: &str, message: &str) -> Result<Submission> {
        let conn = self.connect()?;
        let timestamp = Utc::now();

        conn.execute(
            "INSERT INTO submissions (name, email, message, timestamp)
             VALUES (?1, ?2, ?3, ?4)",
            params![name, email, message, timestamp.to_rfc3339()],
        )?;

        let id = conn.last_insert_rowid();

        Ok(Submission {
            id,
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            timestamp,
        })
    }

    /// List every stored submission, newest first.
    ///
    /// Ordered by timestamp descending with ties broken by id descending,
    /// eagerly materialized into a `Vec` -- a snapshot of the store at call
    /// time.
    pub fn list_all(&self) -> Result<Vec<Submission>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, email, message, timestamp
             FROM submissions
             ORDER BY timestamp DESC, id DESC",
        )?;

        let rows = stmt.query_map([], row_to_submission)?;

        let mut submissions = Vec::new();
        for row in rows {
            submissions.push(row?);
        }
        Ok(submissions)
    }
}

/// Map a `rusqlite::Row` to a [`Submission`].
fn row_to_submission(row: &rusqlite::Row<'_>) -> rusqlite::Result<Submission> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let email: String = row.get(2)?;
    let message: String = row.get(3)?;
    let ts_str: String = row.get(4)?;

    let timestamp: DateTime<Utc> = DateTime::parse_from_rfc3339(&ts_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(Submission {
        id,
        name,
        email,
        message,
        timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> (Database, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open_at(&dir.path().join("contacts.db")).unwrap();
        (db, dir)
    }

    #[test]
    fn save_returns_populated_row() {
        let (db, _dir) = test_db();

        let before = Utc::now();
        let sub = db.save("Al", "a@b.com", "Hello there!").unwrap();
        let after = Utc::now();

        assert_eq!(sub.id, 1);
        assert_eq!(sub.name, "Al");
        assert_eq!(sub.email, "a@b.com");
        assert_eq!(sub.message, "Hello there!");
        assert!(sub.timestamp >= before && sub.timestamp <= after);
    }

    #[test]
    fn ids_strictly_increase() {
        let (db, _dir) = test_db();

        let a = db.save("Al", "a@b.com", "first message").unwrap();
        let b = db.save("Bo", "b@c.org", "second message").unwrap();
        let c = db.save("Cy", "c@d.net", "third message").unwrap();

        assert!(a.id < b.id && b.id < c.id);
    }

    #[test]
    fn list_all_newest_first() {
        let (db, _dir) = test_db();

        db.save("Al", "a@b.com", "first message").unwrap();
        db.save("Bo", "b@c.org", "second message").unwrap();
        db.save("Cy", "c@d.net", "third message").unwrap();

        let all = db.list_all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "Cy");
        assert_eq!(all[1].name, "Bo");
        assert_eq!(all[2].name, "Al");
        assert!(all[0].timestamp >= all[2].timestamp);
    }

    #[test]
    fn equal_timestamps_tie_break_by_id_descending() {
        let (db, _dir) = test_db();

        // Two rows with an identical stored timestamp.
        let conn = db.connect().unwrap();
        for name in ["Al", "Bo"] {
            conn.execute(
                "INSERT INTO submissions (name, email, message, timestamp)
                 VALUES (?1, 'x@y.com', 'ten chars!', '2024-01-01T00:00:00+00:00')",
                params![name],
            )
            .unwrap();
        }

        let all = db.list_all().unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].id > all[1].id);
        assert_eq!(all[0].name, "Bo");
    }

    #[test]
    fn reopen_preserves_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.db");

        let db = Database::open_at(&path).unwrap();
        db.save("Al", "a@b.com", "Hello there!").unwrap();
        drop(db);

        let reopened = Database::open_at(&path).unwrap();
        let all = reopened.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Al");
        assert_eq!(all[0].id, 1);
    }

    #[test]
    fn list_all_empty_database() {
        let (db, _dir) = test_db();
        assert!(db.list_all().unwrap().is_empty());
    }
}
