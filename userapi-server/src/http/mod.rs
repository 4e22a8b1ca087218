//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing
//! - Graceful shutdown
//! - Indented JSON responses, `{"detail": ...}` errors

pub mod error;
pub mod extractors;
pub mod response;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use response::{MessageResponse, PrettyJson};
pub use server::{build_router, run_server, serve, ServerConfig, ServerError};
