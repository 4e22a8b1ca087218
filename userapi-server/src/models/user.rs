//! User entity and its creation/patch schemas
//!
//! Profile fields are validated at construction:
//! - name: trimmed, non-empty, max 128 characters
//! - email: trimmed, lower-cased, `local@domain.tld`, max 254 characters

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{RoleSet, ValidationError};

/// Maximum length for user names
const MAX_NAME_LEN: usize = 128;

/// Maximum length for email addresses (RFC 5321 path limit)
const MAX_EMAIL_LEN: usize = 254;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex"));

/// Validated display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        if s.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_NAME_LEN,
            });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated, normalized email address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }
        if s.chars().count() > MAX_EMAIL_LEN {
            return Err(ValidationError::TooLong {
                field: "email",
                max: MAX_EMAIL_LEN,
            });
        }
        if !EMAIL_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must look like local@domain.tld",
            });
        }
        Ok(Self(s.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Stored user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub roles: RoleSet,
    pub created_at: DateTime<Utc>,
}

/// Creation body for `POST /users`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Validated creation input, ready to persist
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: UserName,
    pub email: Email,
    pub roles: RoleSet,
}

impl UserCreate {
    pub fn validate(&self) -> Result<NewUser, ValidationError> {
        Ok(NewUser {
            name: UserName::new(&self.name)?,
            email: Email::new(&self.email)?,
            roles: RoleSet::parse(&self.roles)?,
        })
    }
}

/// Body for `PATCH /users/{id}/roles`; replaces the whole role set.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserRolesPatch {
    pub roles: Vec<String>,
}

impl UserRolesPatch {
    pub fn validate(&self) -> Result<RoleSet, ValidationError> {
        RoleSet::parse(&self.roles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn name_is_trimmed() {
        assert_eq!(UserName::new("  Ada Lovelace ").unwrap().as_str(), "Ada Lovelace");
    }

    #[test]
    fn rejects_blank_name() {
        let err = UserName::new("   ").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "name" }));
    }

    #[test]
    fn name_length_counts_chars() {
        assert!(UserName::new(&"é".repeat(128)).is_ok());
        let err = UserName::new(&"a".repeat(129)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 128, .. }));
    }

    #[test]
    fn email_is_normalized() {
        assert_eq!(Email::new(" Ada@Example.COM ").unwrap().as_str(), "ada@example.com");
    }

    #[test]
    fn email_length_counts_chars() {
        // 253 characters, 501 bytes
        let ok = format!("{}@e.io", "é".repeat(248));
        assert!(Email::new(&ok).is_ok());

        let long = format!("{}@e.io", "a".repeat(250));
        let err = Email::new(&long).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { field: "email", max: 254 }));
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["ada", "ada@", "@example.com", "ada@example", "a da@example.com"] {
            let err = Email::new(bad).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { field: "email", .. }),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn create_defaults_to_no_roles() {
        let body: UserCreate =
            serde_json::from_str(r#"{"name": "Ada", "email": "ada@example.com"}"#).unwrap();
        let new_user = body.validate().unwrap();
        assert!(new_user.roles.as_slice().is_empty());
    }

    #[test]
    fn create_rejects_unknown_role() {
        let body = UserCreate {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            roles: vec!["wizard".into()],
        };
        assert!(matches!(
            body.validate().unwrap_err(),
            ValidationError::InvalidVariant { .. }
        ));
    }

    #[test]
    fn patch_validates_roles() {
        let patch = UserRolesPatch {
            roles: vec!["editor".into(), "viewer".into()],
        };
        let roles = patch.validate().unwrap();
        assert_eq!(roles.as_slice(), &[Role::Editor, Role::Viewer]);
    }
}
