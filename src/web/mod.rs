//! HTTP surface for shelf.

pub mod cors;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use server::WebServer;
