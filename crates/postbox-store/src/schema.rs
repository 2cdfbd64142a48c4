//! Submissions table schema.
//!
//! There is exactly one table and no versioned migrations: the schema is
//! applied with `CREATE TABLE IF NOT EXISTS` on every open, which leaves
//! existing data untouched.

use rusqlite::Connection;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS submissions (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    name      TEXT NOT NULL,
    email     TEXT NOT NULL,
    message   TEXT NOT NULL,
    timestamp TEXT NOT NULL                  -- ISO-8601 / RFC-3339, UTC
);

CREATE INDEX IF NOT EXISTS idx_submissions_ts
    ON submissions(timestamp DESC, id DESC);
"#;

/// Idempotently ensure the submissions table and its listing index exist.
pub fn ensure_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)
}
