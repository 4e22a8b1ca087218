//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod pagination;
pub mod role;
pub mod user;
pub mod validation;

pub use pagination::{Pagination, PaginationParams};
pub use role::{Role, RoleSet};
pub use user::{Email, NewUser, User, UserCreate, UserName, UserRolesPatch};
pub use validation::ValidationError;
