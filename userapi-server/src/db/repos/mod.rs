//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Owns exactly one request-scoped session
//! - Commits on success, rolls back on drop
//! - Relies on DB constraints for uniqueness (no check-then-insert)

pub mod users;

pub use users::UserRepo;
