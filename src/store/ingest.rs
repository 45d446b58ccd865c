//! Ingestion coordinator.
//!
//! Orchestrates validate → store blob → index record for uploads and
//! the symmetric delete path. This is the owner of the cross-store
//! invariant: a metadata row and its blob appear and disappear together,
//! with the one accepted partial-failure state handled explicitly (see
//! [`IngestService::upload`]).

use tracing::{error, warn};

use crate::db::Database;
use crate::{Result, ShelfError};

use super::blob::BlobStore;
use super::metadata::{FileRecord, FileRepository, NewFileRecord};
use super::{validate_extension, DEFAULT_MAX_UPLOAD_SIZE};

/// Request data for a file upload.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Original filename as supplied by the client.
    pub original_name: String,
    /// Client-declared MIME type.
    pub mime_type: String,
    /// File content.
    pub content: Vec<u8>,
}

impl UploadRequest {
    /// Create a new upload request.
    pub fn new(
        original_name: impl Into<String>,
        mime_type: impl Into<String>,
        content: Vec<u8>,
    ) -> Self {
        Self {
            original_name: original_name.into(),
            mime_type: mime_type.into(),
            content,
        }
    }
}

/// Result of a file download.
#[derive(Debug)]
pub struct DownloadResult {
    /// File metadata.
    pub record: FileRecord,
    /// File content.
    pub content: Vec<u8>,
}

/// Coordinator for uploads, downloads and deletes.
///
/// Holds no persistent state of its own; the blob store owns the bytes
/// on disk and the metadata index owns the rows.
pub struct IngestService<'a> {
    db: &'a Database,
    blobs: &'a BlobStore,
    max_upload_size: u64,
}

impl<'a> IngestService<'a> {
    /// Create a new IngestService with the default size cap.
    pub fn new(db: &'a Database, blobs: &'a BlobStore) -> Self {
        Self {
            db,
            blobs,
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
        }
    }

    /// Override the maximum upload size in bytes.
    pub fn with_max_upload_size(mut self, max_size: u64) -> Self {
        self.max_upload_size = max_size;
        self
    }

    /// Get the configured maximum upload size.
    pub fn max_upload_size(&self) -> u64 {
        self.max_upload_size
    }

    /// Upload a file: validate, persist the blob, then index it.
    ///
    /// Validation failures short-circuit before any side effect. A blob
    /// write failure leaves nothing to clean up. If the index insert
    /// fails after the blob was written, the blob is deleted again
    /// (compensation) so no orphan survives; if that delete fails too,
    /// both failures surface as a single [`ShelfError::OrphanedBlob`].
    pub async fn upload(&self, request: &UploadRequest) -> Result<FileRecord> {
        let ext = validate_extension(&request.original_name)?;

        let size = request.content.len() as u64;
        if size > self.max_upload_size {
            return Err(ShelfError::PayloadTooLarge {
                size,
                limit: self.max_upload_size,
            });
        }

        let stored_name = self.blobs.put(&request.content, &ext)?;

        let new_record = NewFileRecord::new(
            &stored_name,
            &request.original_name,
            &request.mime_type,
            request.content.len() as i64,
        );

        let repo = FileRepository::new(self.db.pool());
        match repo.insert(&new_record).await {
            Ok(record) => Ok(record),
            Err(cause) => {
                warn!(
                    stored_name = %stored_name,
                    error = %cause,
                    "Index insert failed after blob write; removing blob"
                );
                match self.blobs.delete(&stored_name) {
                    Ok(_) => Err(cause),
                    Err(cleanup) => {
                        error!(
                            stored_name = %stored_name,
                            error = %cleanup,
                            "Orphan blob cleanup failed"
                        );
                        Err(ShelfError::OrphanedBlob {
                            stored_name,
                            cause: cause.to_string(),
                            cleanup: cleanup.to_string(),
                        })
                    }
                }
            }
        }
    }

    /// Download a file by id.
    ///
    /// A row whose blob is missing on disk reports `NotFound` rather
    /// than a distinct corruption error.
    pub async fn download(&self, id: i64) -> Result<DownloadResult> {
        let repo = FileRepository::new(self.db.pool());
        let record = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| ShelfError::NotFound("file".to_string()))?;

        let content = self.blobs.get(&record.filename)?;

        Ok(DownloadResult { record, content })
    }

    /// Delete a file by id.
    ///
    /// Blob first, index row second: a crash in between leaves a
    /// dangling row that a retry can still resolve, never an
    /// unreachable blob.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let repo = FileRepository::new(self.db.pool());
        let record = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| ShelfError::NotFound("file".to_string()))?;

        self.blobs.delete(&record.filename)?;
        repo.delete(id).await?;

        Ok(())
    }

    /// List all files, newest first.
    pub async fn list(&self) -> Result<Vec<FileRecord>> {
        FileRepository::new(self.db.pool()).list().await
    }
}
