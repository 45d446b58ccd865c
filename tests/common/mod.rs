//! Shared test helpers for the HTTP API tests.

// Each test binary uses a subset of these helpers.
#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use tempfile::TempDir;

use shelf::store::BlobStore;
use shelf::web::handlers::AppState;
use shelf::web::router::{create_health_router, create_router};
use shelf::Database;

/// Create a test server over an in-memory database and a temporary
/// blob directory. The TempDir must stay alive for the duration of the
/// test.
pub async fn create_test_server() -> (TestServer, Arc<Database>, TempDir) {
    create_test_server_with_cap(None).await
}

/// Same as [`create_test_server`] but with an explicit upload cap.
pub async fn create_test_server_with_cap(
    max_upload_size: Option<u64>,
) -> (TestServer, Arc<Database>, TempDir) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let shared_db = Arc::new(db);

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let blobs = BlobStore::new(temp_dir.path()).expect("Failed to create blob store");

    let mut app_state = AppState::new(shared_db.clone(), blobs);
    if let Some(cap) = max_upload_size {
        app_state = app_state.with_max_upload_size(cap);
    }

    let router = create_router(Arc::new(app_state), &[]).merge(create_health_router());

    let server = TestServer::new(router).expect("Failed to create test server");

    (server, shared_db, temp_dir)
}

/// Count the blobs currently on disk.
pub fn blob_count(temp_dir: &TempDir) -> usize {
    std::fs::read_dir(temp_dir.path())
        .expect("Failed to read blob dir")
        .count()
}
