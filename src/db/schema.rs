//! Database schema and migrations for shelf.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: files table - one row per stored blob
    r#"
CREATE TABLE files (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    filename          TEXT NOT NULL UNIQUE,     -- generated stored name on disk
    original_filename TEXT NOT NULL,            -- user-supplied display name
    mimetype          TEXT NOT NULL,            -- client-declared, untrusted
    size              INTEGER NOT NULL,         -- measured server-side
    upload_date       TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_files_upload_date ON files(upload_date);
"#,
    // v2: theme_preferences table - singleton row keyed on a fixed id
    r#"
CREATE TABLE theme_preferences (
    id            INTEGER PRIMARY KEY,
    theme         TEXT NOT NULL,
    gradient_from TEXT NOT NULL,
    gradient_to   TEXT NOT NULL,
    gradient_on   INTEGER NOT NULL DEFAULT 1
);
"#,
];
