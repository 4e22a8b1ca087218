//! User endpoints
//!
//! Each handler opens one session through `UserRepo::begin` (reads) or
//! `UserRepo::begin_write` (writes), runs a single repository operation and
//! lets `ApiError` pick the status code.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, patch},
    Router,
};

use crate::db::UserRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidQuery, ValidUuid};
use crate::http::response::{MessageResponse, PrettyJson};
use crate::models::{Pagination, PaginationParams, User, UserCreate, UserRolesPatch};
use crate::state::AppState;

pub const USER_CREATED: &str = "User successfully created.";

/// Roles-patch acknowledgement. Identical to the create text; clients
/// compare against it, so it stays as is.
pub const USER_ROLES_UPDATED: &str = USER_CREATED;

pub const USER_DELETED: &str = "User successfully deleted.";

/// GET /users - list users in insertion order
async fn list_users(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> Result<PrettyJson<Vec<User>>, ApiError> {
    let page = Pagination::try_from(params)?;
    let users = UserRepo::begin(state.pool()).await?.list_users(page).await?;
    Ok(PrettyJson(users))
}

/// GET /users/{id}
async fn get_user(
    State(state): State<AppState>,
    ValidUuid(id): ValidUuid,
) -> Result<PrettyJson<User>, ApiError> {
    let user = UserRepo::begin(state.pool()).await?.get_user(id).await?;
    Ok(PrettyJson(user))
}

/// POST /users
async fn create_user(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<UserCreate>,
) -> Result<(StatusCode, PrettyJson<MessageResponse>), ApiError> {
    let user = UserRepo::begin_write(state.pool())
        .await?
        .create_user(&body)
        .await?;
    tracing::info!(user_id = %user.id, "User created");

    Ok((
        StatusCode::CREATED,
        PrettyJson(MessageResponse::new(USER_CREATED)),
    ))
}

/// PATCH /users/{id}/roles - replace the role set
async fn update_user_roles(
    State(state): State<AppState>,
    ValidUuid(id): ValidUuid,
    ValidJson(patch): ValidJson<UserRolesPatch>,
) -> Result<PrettyJson<MessageResponse>, ApiError> {
    UserRepo::begin_write(state.pool())
        .await?
        .update_user_roles(id, &patch)
        .await?;

    Ok(PrettyJson(MessageResponse::new(USER_ROLES_UPDATED)))
}

/// DELETE /users/{id}
async fn delete_user(
    State(state): State<AppState>,
    ValidUuid(id): ValidUuid,
) -> Result<PrettyJson<MessageResponse>, ApiError> {
    UserRepo::begin_write(state.pool())
        .await?
        .delete_user(id)
        .await?;
    tracing::info!(user_id = %id, "User deleted");

    Ok(PrettyJson(MessageResponse::new(USER_DELETED)))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).delete(delete_user))
        .route("/users/{id}/roles", patch(update_user_roles))
}
