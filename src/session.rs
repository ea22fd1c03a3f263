//! Authenticated session context and role checks.

use serde::{Deserialize, Serialize};

/// A named role granted to a user (e.g. `"admin"`, `"cutting-floor"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Role(pub String);

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// The signed-in user, as handed to screens that gate capabilities on
/// roles. Constructed at sign-in; screens receive it explicitly rather
/// than reading ambient globals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
    pub roles: Vec<Role>,
}

impl Session {
    pub fn new(user_id: i64, username: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            user_id,
            username: username.into(),
            roles,
        }
    }

    pub fn has_any_role(&self, required: &[Role]) -> bool {
        has_any_role(required, &self.roles)
    }
}

/// True when the user holds at least one of the required roles. An empty
/// requirement is satisfied by anyone, including a user with no roles.
pub fn has_any_role(required: &[Role], held: &[Role]) -> bool {
    required.is_empty() || required.iter().any(|role| held.contains(role))
}
