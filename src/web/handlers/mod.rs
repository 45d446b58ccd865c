//! API handlers for the HTTP surface.

pub mod files;
pub mod theme;

pub use files::*;
pub use theme::*;

use std::sync::Arc;

use crate::db::Database;
use crate::store::{BlobStore, IngestService, DEFAULT_MAX_UPLOAD_SIZE};

/// Shared reference to the database.
pub type SharedDatabase = Arc<Database>;

/// Application state shared by all handlers.
///
/// Both stores are injected at construction; handlers never reach for
/// ambient globals.
pub struct AppState {
    /// Database handle.
    pub db: SharedDatabase,
    /// Blob store for uploaded file content.
    pub blobs: BlobStore,
    /// Maximum upload size in bytes.
    pub max_upload_size: u64,
}

impl AppState {
    /// Create a new AppState with the default upload size cap.
    pub fn new(db: SharedDatabase, blobs: BlobStore) -> Self {
        Self {
            db,
            blobs,
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
        }
    }

    /// Override the maximum upload size in bytes.
    pub fn with_max_upload_size(mut self, max_upload_size: u64) -> Self {
        self.max_upload_size = max_upload_size;
        self
    }

    /// Build an ingestion service over this state's stores.
    pub fn ingest(&self) -> IngestService<'_> {
        IngestService::new(&self.db, &self.blobs).with_max_upload_size(self.max_upload_size)
    }
}
