//! Account and role models.
//!
//! # Purpose
//! Defines the credential records read during login and authorization. Roles
//! are a fixed record type with a required boolean admin flag, so a missing
//! role and a missing grant stay distinguishable in the resolver.
use serde::Deserialize;

/// Role id an account falls back to when no role reference is set.
pub const STANDARD_ROLE_ID: &str = "user";

/// Role id carrying `admin_permissions`.
pub const ADMIN_ROLE_ID: &str = "admin";

/// A login account. Created out-of-band (seeded at startup); the service
/// itself never mutates accounts.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub id: String,
    pub username: String,
    /// Argon2id PHC string with embedded salt. Never returned to clients.
    pub password_hash: String,
    /// Optional role reference; `None` resolves to [`STANDARD_ROLE_ID`].
    #[serde(default)]
    pub role: Option<String>,
}

impl Account {
    pub fn role_id(&self) -> &str {
        self.role.as_deref().unwrap_or(STANDARD_ROLE_ID)
    }
}

/// Static reference data gating mutation endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub admin_permissions: bool,
}

/// The two roles every deployment starts with.
pub fn builtin_roles() -> Vec<Role> {
    vec![
        Role {
            id: STANDARD_ROLE_ID.to_string(),
            name: "user".to_string(),
            admin_permissions: false,
        },
        Role {
            id: ADMIN_ROLE_ID.to_string(),
            name: "admin".to_string(),
            admin_permissions: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_id_falls_back_to_standard_role() {
        let account = Account {
            id: "a1".to_string(),
            username: "alice".to_string(),
            password_hash: "hash".to_string(),
            role: None,
        };
        assert_eq!(account.role_id(), STANDARD_ROLE_ID);
    }

    #[test]
    fn builtin_roles_cover_both_grants() {
        let roles = builtin_roles();
        assert!(roles.iter().any(|role| role.id == ADMIN_ROLE_ID && role.admin_permissions));
        assert!(
            roles
                .iter()
                .any(|role| role.id == STANDARD_ROLE_ID && !role.admin_permissions)
        );
    }
}
