//! Role identifiers and role sets

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Role identifier attached to a user.
///
/// Closed set; anything else is rejected at validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl Role {
    /// Parse a role identifier (case-insensitive, surrounding whitespace ignored).
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "editor" => Ok(Self::Editor),
            "viewer" => Ok(Self::Viewer),
            _ => Err(ValidationError::InvalidVariant {
                field: "role",
                value: s.to_owned(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Viewer => "viewer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, duplicate-free collection of roles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(Vec<Role>);

impl RoleSet {
    /// Validate raw role identifiers.
    ///
    /// Fails on the first unknown identifier. Repeated roles keep their
    /// first position.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self, ValidationError> {
        let mut roles = Vec::with_capacity(raw.len());
        for s in raw {
            let role = Role::parse(s.as_ref())?;
            if !roles.contains(&role) {
                roles.push(role);
            }
        }
        Ok(Self(roles))
    }

    pub fn as_slice(&self) -> &[Role] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles() {
        for role in [Role::Admin, Role::Editor, Role::Viewer] {
            assert_eq!(Role::parse(role.as_str()).unwrap(), role);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Role::parse(" Admin ").unwrap(), Role::Admin);
    }

    #[test]
    fn rejects_unknown_role() {
        let err = Role::parse("superuser").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidVariant { field: "role", ref value } if value == "superuser"
        ));
    }

    #[test]
    fn role_set_dedupes_keeping_order() {
        let set = RoleSet::parse(&["viewer", "admin", "viewer"]).unwrap();
        assert_eq!(set.as_slice(), &[Role::Viewer, Role::Admin]);
    }

    #[test]
    fn role_set_fails_on_any_unknown() {
        assert!(RoleSet::parse(&["admin", "nope"]).is_err());
    }

    #[test]
    fn empty_role_set_is_valid() {
        let empty: [&str; 0] = [];
        assert!(RoleSet::parse(&empty).unwrap().as_slice().is_empty());
    }

    #[test]
    fn serializes_as_plain_array() {
        let set = RoleSet::parse(&["editor", "admin"]).unwrap();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["editor","admin"]"#);
    }
}
