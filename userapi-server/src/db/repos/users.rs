//! User repository
//!
//! A `UserRepo` owns one request-scoped `Session`. Every operation
//! consumes the repo: it commits on success and rolls back (by drop) on
//! any error, so the session never outlives the call.

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::db::error::DbError;
use crate::db::session::Session;
use crate::models::{Pagination, RoleSet, User, UserCreate, UserRolesPatch};

/// User row as stored
#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    roles: Json<RoleSet>,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            roles: row.roles.0,
            created_at: row.created_at,
        }
    }
}

fn not_found(id: Uuid) -> DbError {
    DbError::NotFound {
        resource: "user",
        id: id.to_string(),
    }
}

/// User repository
pub struct UserRepo {
    session: Session,
}

impl UserRepo {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Open a fresh read session on `pool` and wrap it.
    pub async fn begin(pool: &SqlitePool) -> Result<Self, DbError> {
        Ok(Self::new(Session::begin(pool).await?))
    }

    /// Open a session holding the write lock; required for create, patch
    /// and delete.
    pub async fn begin_write(pool: &SqlitePool) -> Result<Self, DbError> {
        Ok(Self::new(Session::begin_write(pool).await?))
    }

    /// List users in insertion order.
    pub async fn list_users(mut self, page: Pagination) -> Result<Vec<User>, DbError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, roles, created_at
            FROM users
            ORDER BY rowid
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(page.limit())
        .bind(page.skip())
        .fetch_all(self.session.conn())
        .await?;

        self.session.commit().await?;
        tracing::debug!(
            skip = page.skip(),
            limit = page.limit(),
            count = rows.len(),
            "listed users"
        );
        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Get a single user by ID.
    pub async fn get_user(mut self, id: Uuid) -> Result<User, DbError> {
        let user = self.fetch(id).await?;
        self.session.commit().await?;
        Ok(user)
    }

    /// Validate and insert a new user with a generated ID.
    ///
    /// A duplicate email is reported as a conflict, not a database error.
    pub async fn create_user(mut self, input: &UserCreate) -> Result<User, DbError> {
        let new_user = input.validate()?;
        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name.as_str().to_owned(),
            email: new_user.email.as_str().to_owned(),
            roles: new_user.roles,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, roles, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(Json(&user.roles))
        .bind(user.created_at)
        .execute(self.session.conn())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => DbError::Conflict {
                resource: "user",
                field: "email",
                value: user.email.clone(),
            },
            other => DbError::Sqlx(other),
        })?;

        self.session.commit().await?;
        tracing::debug!(user_id = %user.id, "created user");
        Ok(user)
    }

    /// Replace the role set of an existing user.
    ///
    /// Existence is checked before the patch is validated, so an unknown ID
    /// reports not-found even when the roles are also invalid.
    pub async fn update_user_roles(
        mut self,
        id: Uuid,
        patch: &UserRolesPatch,
    ) -> Result<User, DbError> {
        let mut user = self.fetch(id).await?;
        let roles = patch.validate()?;

        sqlx::query("UPDATE users SET roles = ? WHERE id = ?")
            .bind(Json(&roles))
            .bind(id)
            .execute(self.session.conn())
            .await?;

        self.session.commit().await?;
        user.roles = roles;
        tracing::debug!(user_id = %id, roles = ?user.roles.as_slice(), "updated user roles");
        Ok(user)
    }

    /// Hard-delete a user.
    pub async fn delete_user(mut self, id: Uuid) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.session.conn())
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        self.session.commit().await?;
        tracing::debug!(user_id = %id, "deleted user");
        Ok(())
    }

    async fn fetch(&mut self, id: Uuid) -> Result<User, DbError> {
        let row: UserRow = sqlx::query_as(
            r#"
            SELECT id, name, email, roles, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.session.conn())
        .await?
        .ok_or_else(|| not_found(id))?;

        Ok(row.into())
    }
}
