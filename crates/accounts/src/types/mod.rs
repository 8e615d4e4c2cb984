//! Shared types for the accounts crate.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Role name that unlocks the privileged operations.
pub const ADMIN_ROLE: &str = "ADMIN";

/// Identity of the caller invoking an operation, as resolved by the session
/// layer. Authorization-sensitive operations take this as an explicit
/// argument; the service never reads ambient security state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Caller {
    pub username: String,
    pub roles: HashSet<String>,
}

impl Caller {
    pub fn new(
        username: impl Into<String>,
        roles: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            username: username.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ADMIN_ROLE)
    }
}
