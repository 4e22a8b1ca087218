//! Database layer - connection pool, schema, sessions and repositories
//!
//! # Design Principles
//!
//! - Connection pool, no Arc<Mutex<Connection>>
//! - One transaction per request, never shared
//! - Rely on DB constraints, handle conflicts - no check-then-insert

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod session;

pub use error::{DbError, ErrorKind};
pub use pool::{create_memory_pool, create_pool, create_pool_with_options};
pub use repos::*;
pub use schema::ensure_schema;
pub use session::Session;
