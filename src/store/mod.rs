//! File storage for shelf.
//!
//! Three layers:
//! - [`BlobStore`]: raw bytes on disk under generated names
//! - [`FileRepository`]: the metadata index in SQLite
//! - [`IngestService`]: the coordinator that keeps the two consistent
//!
//! Plus the [`ThemeRepository`] singleton preference store.

mod blob;
mod ingest;
mod metadata;
mod theme;

pub use blob::BlobStore;
pub use ingest::{DownloadResult, IngestService, UploadRequest};
pub use metadata::{FileRecord, FileRepository, NewFileRecord};
pub use theme::{ThemePreference, ThemeRepository};

/// File extensions accepted for upload (lowercase, no dot).
pub const ALLOWED_EXTENSIONS: &[&str] = &["txt", "png", "jpg", "jpeg", "json"];

/// Default maximum upload size: 10 MiB.
pub const DEFAULT_MAX_UPLOAD_SIZE: u64 = 10 * 1024 * 1024;

/// Extract and validate the extension of an uploaded filename.
///
/// Returns the lowercased extension when it is on the allow-list.
pub fn validate_extension(filename: &str) -> crate::Result<String> {
    let ext = std::path::Path::new(filename)
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());

    match ext {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(ext),
        _ => Err(crate::ShelfError::Validation(
            "file type not allowed".to_string(),
        )),
    }
}
