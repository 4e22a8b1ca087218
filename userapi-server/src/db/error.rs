//! Repository error type and its classification

use crate::models::ValidationError;

/// Failure class used by the HTTP boundary to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Referenced row does not exist
    NotFound,
    /// Caller input violates domain constraints
    BusinessLogic,
    /// Anything else: connectivity, driver, decoding
    Infrastructure,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{resource} with {field} '{value}' already exists")]
    Conflict {
        resource: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl DbError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Validation(_) | Self::Conflict { .. } => ErrorKind::BusinessLogic,
            Self::Sqlx(_) => ErrorKind::Infrastructure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_variants() {
        let not_found = DbError::NotFound {
            resource: "user",
            id: "x".into(),
        };
        assert_eq!(not_found.kind(), ErrorKind::NotFound);

        let invalid = DbError::from(ValidationError::Empty { field: "name" });
        assert_eq!(invalid.kind(), ErrorKind::BusinessLogic);

        let conflict = DbError::Conflict {
            resource: "user",
            field: "email",
            value: "a@b.io".into(),
        };
        assert_eq!(conflict.kind(), ErrorKind::BusinessLogic);

        let infra = DbError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(infra.kind(), ErrorKind::Infrastructure);
    }

    #[test]
    fn messages() {
        let err = DbError::NotFound {
            resource: "user",
            id: "42".into(),
        };
        assert_eq!(err.to_string(), "user '42' not found");

        let err = DbError::from(ValidationError::Empty { field: "email" });
        assert_eq!(err.to_string(), "email cannot be empty");

        let err = DbError::Conflict {
            resource: "user",
            field: "email",
            value: "a@b.io".into(),
        };
        assert_eq!(err.to_string(), "user with email 'a@b.io' already exists");
    }
}
