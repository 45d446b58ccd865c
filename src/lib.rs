//! shelf - a minimal self-hosted file shelf.
//!
//! Upload, list, download and delete files over HTTP, with metadata in
//! SQLite and blobs on the local filesystem.

pub mod config;
pub mod datetime;
pub mod db;
pub mod error;
pub mod logging;
pub mod store;
pub mod web;

pub use config::Config;
pub use db::Database;
pub use error::{Result, ShelfError};
pub use store::{
    BlobStore, FileRecord, FileRepository, IngestService, NewFileRecord, ThemePreference,
    ThemeRepository, UploadRequest,
};
pub use web::WebServer;
