//! User entity and the transient request types that feed the account service.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::role::Role;

/// A persisted user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Database primary key; `0` until the store assigns one.
    pub id: i64,
    /// Login name, unique among live records.
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// National identity document number, unique among live records.
    pub dui: String,
    /// Argon2 hash of the password. Never serialized.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Assigned roles, loaded through the `users_roles` association.
    pub roles: Vec<Role>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 timestamp of the last write.
    pub updated_at: String,
}

impl User {
    /// Build an unsaved user from a creation request and an already-hashed password.
    ///
    /// The plaintext password and its confirmation stay behind in the request;
    /// only the hash crosses into the entity.
    pub fn from_request(request: &CreateUserRequest, password_hash: String) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: 0,
            username: request.username.clone(),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            dui: request.dui.clone(),
            password_hash,
            roles: request.roles.clone(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn has_role(&self, name: &str) -> bool {
        self.roles.iter().any(|role| role.name == name)
    }

    /// Update the write timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().to_rfc3339();
    }
}

/// Request to create a new user. Carries the plaintext password and its
/// confirmation; neither is ever persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dui: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// Request to overwrite the mutable attributes of an existing user.
///
/// The password is deliberately absent; it only changes through the
/// dedicated password-change operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dui: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// Request to change a user's password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    /// The user whose password is being changed.
    pub user_id: i64,
    /// The caller's current password. Admin callers may omit it.
    pub current_password: Option<String>,
    pub new_password: String,
    pub confirm_password: String,
}
