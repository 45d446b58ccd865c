//! File handlers: upload, list, download, delete.

use axum::{
    extract::{Multipart, Path, State},
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::store::UploadRequest;
use crate::web::dto::{FileResponse, UploadResponse};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// Generate a safe Content-Disposition header value for file downloads.
///
/// Sanitizes the filename to prevent header injection and uses RFC 5987
/// encoding for non-ASCII filenames:
/// - control characters (CR, LF) are removed
/// - double quotes and backslashes are replaced
/// - the `filename*` parameter carries the UTF-8 original
fn content_disposition_header(filename: &str) -> String {
    let sanitized: String = filename
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| match c {
            '"' => '_',
            '\\' => '_',
            _ => c,
        })
        .collect();

    if filename.is_ascii() && !filename.chars().any(|c| c.is_control() || c == '"' || c == '\\') {
        return format!("attachment; filename=\"{}\"", filename);
    }

    let encoded = urlencoding::encode(filename);

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        sanitized, encoded
    )
}

/// POST /files - Upload a file.
///
/// Request body: multipart/form-data with a "file" field.
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    let mut filename: Option<String> = None;
    let mut declared_mime: Option<String> = None;
    let mut content: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to read multipart field: {}", e);
        ApiError::bad_request("Invalid multipart data")
    })? {
        if field.name() != Some("file") {
            continue;
        }

        filename = field.file_name().map(|s| s.to_string());
        declared_mime = field.content_type().map(|s| s.to_string());
        content = Some(
            field
                .bytes()
                .await
                .map_err(|e| {
                    tracing::error!("Failed to read file content: {}", e);
                    ApiError::bad_request("Failed to read file")
                })?
                .to_vec(),
        );
    }

    let filename = filename.ok_or_else(|| ApiError::bad_request("File is required"))?;
    let content = content.ok_or_else(|| ApiError::bad_request("File is required"))?;

    // The declared type is untrusted but recorded as-is; when the client
    // omits it, guess from the extension.
    let mime_type = declared_mime.unwrap_or_else(|| {
        mime_guess::from_path(&filename)
            .first_or_octet_stream()
            .to_string()
    });

    let request = UploadRequest::new(filename, mime_type, content);
    let record = state.ingest().upload(&request).await?;

    tracing::info!(id = record.id, size = record.size, "File uploaded");

    Ok((StatusCode::CREATED, Json(UploadResponse { id: record.id })))
}

/// GET /files - List all files, newest first.
pub async fn list_files(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FileResponse>>, ApiError> {
    let records = state.ingest().list().await?;

    Ok(Json(records.into_iter().map(FileResponse::from).collect()))
}

/// GET /files/:id - Download a file.
///
/// Responds with the stored bytes, the original filename in
/// Content-Disposition and the declared MIME type in Content-Type.
pub async fn download_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.ingest().download(id).await?;

    let content_type = HeaderValue::from_str(&result.record.mimetype)
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));
    let disposition = content_disposition_header(&result.record.original_filename);
    let disposition = HeaderValue::from_str(&disposition)
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        result.content,
    ))
}

/// DELETE /files/:id - Delete a file.
pub async fn delete_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.ingest().delete(id).await?;

    tracing::info!(id, "File deleted");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_plain_ascii() {
        assert_eq!(
            content_disposition_header("report.txt"),
            "attachment; filename=\"report.txt\""
        );
    }

    #[test]
    fn test_content_disposition_strips_control_chars() {
        let value = content_disposition_header("bad\r\nname.txt");
        assert!(!value.contains('\r'));
        assert!(!value.contains('\n'));
    }

    #[test]
    fn test_content_disposition_escapes_quotes() {
        let value = content_disposition_header("na\"me.txt");
        assert!(value.contains("na_me.txt"));
    }

    #[test]
    fn test_content_disposition_non_ascii_uses_rfc5987() {
        let value = content_disposition_header("日本語.txt");
        assert!(value.contains("filename*=UTF-8''"));
    }
}
