//! Response DTOs for the HTTP surface.

use serde::Serialize;

use crate::datetime::to_rfc3339;
use crate::store::FileRecord;

/// A file record as serialized at the API boundary.
#[derive(Debug, Clone, Serialize)]
pub struct FileResponse {
    pub id: i64,
    /// Stored name on disk.
    pub filename: String,
    pub original_filename: String,
    pub mimetype: String,
    pub size: i64,
    /// Upload time as RFC3339 (e.g., "2024-01-15T10:30:00Z").
    pub upload_date: String,
}

impl From<FileRecord> for FileResponse {
    fn from(record: FileRecord) -> Self {
        Self {
            id: record.id,
            filename: record.filename,
            original_filename: record.original_filename,
            mimetype: record.mimetype,
            size: record.size,
            upload_date: to_rfc3339(&record.upload_date),
        }
    }
}

/// Response body for a successful upload.
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> FileRecord {
        FileRecord {
            id: 7,
            filename: "ab12.txt".to_string(),
            original_filename: "notes.txt".to_string(),
            mimetype: "text/plain".to_string(),
            size: 42,
            upload_date: "2024-01-15 10:30:00".to_string(),
        }
    }

    #[test]
    fn test_file_response_from_record() {
        let response = FileResponse::from(sample_record());

        assert_eq!(response.id, 7);
        assert_eq!(response.filename, "ab12.txt");
        assert_eq!(response.original_filename, "notes.txt");
        assert_eq!(response.upload_date, "2024-01-15T10:30:00Z");
    }

    #[test]
    fn test_file_response_serializes_expected_fields() {
        let json = serde_json::to_value(FileResponse::from(sample_record())).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["mimetype"], "text/plain");
        assert_eq!(json["size"], 42);
        assert_eq!(json["upload_date"], "2024-01-15T10:30:00Z");
    }

    #[test]
    fn test_upload_response() {
        let json = serde_json::to_value(UploadResponse { id: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3}));
    }
}
