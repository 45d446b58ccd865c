//! File metadata types and repository.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::datetime::parse_stored;
use crate::{Result, ShelfError};

/// Metadata for one stored file.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FileRecord {
    /// Unique file ID, assigned by the index.
    pub id: i64,
    /// Stored filename on disk (uuid.ext format).
    pub filename: String,
    /// Original filename as supplied by the uploader.
    pub original_filename: String,
    /// Client-declared MIME type.
    pub mimetype: String,
    /// File size in bytes, measured server-side.
    pub size: i64,
    /// When the file was uploaded (SQLite datetime text, UTC).
    pub upload_date: String,
}

impl FileRecord {
    /// Get the upload date as DateTime<Utc>.
    pub fn upload_date_datetime(&self) -> DateTime<Utc> {
        parse_stored(&self.upload_date)
    }
}

/// Data for creating a new file record.
#[derive(Debug, Clone)]
pub struct NewFileRecord {
    /// Stored filename on disk (uuid.ext format).
    pub filename: String,
    /// Original filename as supplied by the uploader.
    pub original_filename: String,
    /// Client-declared MIME type.
    pub mimetype: String,
    /// File size in bytes, measured server-side.
    pub size: i64,
}

impl NewFileRecord {
    /// Create a new NewFileRecord.
    pub fn new(
        filename: impl Into<String>,
        original_filename: impl Into<String>,
        mimetype: impl Into<String>,
        size: i64,
    ) -> Self {
        Self {
            filename: filename.into(),
            original_filename: original_filename.into(),
            mimetype: mimetype.into(),
            size,
        }
    }
}

/// Repository for file metadata operations.
pub struct FileRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FileRepository<'a> {
    /// Create a new FileRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new file record and return it with its assigned id.
    pub async fn insert(&self, record: &NewFileRecord) -> Result<FileRecord> {
        let result = sqlx::query(
            "INSERT INTO files (filename, original_filename, mimetype, size)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&record.filename)
        .bind(&record.original_filename)
        .bind(&record.mimetype)
        .bind(record.size)
        .execute(self.pool)
        .await
        .map_err(|e| ShelfError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| ShelfError::Database("inserted row not found".to_string()))
    }

    /// Get a file record by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<FileRecord>> {
        let record = sqlx::query_as::<_, FileRecord>(
            "SELECT id, filename, original_filename, mimetype, size, upload_date
             FROM files WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| ShelfError::Database(e.to_string()))?;

        Ok(record)
    }

    /// List all file records, newest first. Ties in upload time break by
    /// insertion order (id descending).
    pub async fn list(&self) -> Result<Vec<FileRecord>> {
        let records = sqlx::query_as::<_, FileRecord>(
            "SELECT id, filename, original_filename, mimetype, size, upload_date
             FROM files ORDER BY upload_date DESC, id DESC",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| ShelfError::Database(e.to_string()))?;

        Ok(records)
    }

    /// Delete a file record by ID. Returns `true` if a row was removed.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM files WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| ShelfError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    /// Count all file records.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM files")
            .fetch_one(self.pool)
            .await
            .map_err(|e| ShelfError::Database(e.to_string()))?;

        Ok(count)
    }
}
