//! userapi-server: HTTP CRUD service for user records
//!
//! Layers, leaf first:
//! - `models`: user shape, creation/patch schemas, validation
//! - `db`: pool, schema, request-scoped sessions, `UserRepo`
//! - `http`: routes, extractors, error-to-status mapping, server bootstrap

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use state::AppState;
