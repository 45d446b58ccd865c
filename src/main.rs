use std::sync::Arc;

use tracing::info;

use shelf::store::BlobStore;
use shelf::web::handlers::AppState;
use shelf::{Config, Database, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = shelf::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        shelf::logging::init_console_only(&config.logging.level);
    }

    info!("shelf - minimal file shelf");

    let db = match Database::open(&config.database.path).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to open database: {e}");
            std::process::exit(1);
        }
    };

    let blobs = match BlobStore::new(&config.storage.path) {
        Ok(blobs) => blobs,
        Err(e) => {
            eprintln!("Failed to initialize blob storage: {e}");
            std::process::exit(1);
        }
    };
    info!("Blob storage initialized at: {}", config.storage.path);

    let app_state = Arc::new(
        AppState::new(Arc::new(db), blobs)
            .with_max_upload_size(config.storage.max_upload_size_bytes()),
    );

    let server = WebServer::new(&config.server, app_state);
    if let Err(e) = server.run().await {
        eprintln!("Web server error: {e}");
        std::process::exit(1);
    }
}
