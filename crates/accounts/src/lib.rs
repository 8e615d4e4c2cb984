//! # Padron Accounts Crate
//!
//! This crate provides the account management core for the Padron backend:
//! creating, reading, updating, and deleting user accounts, assigning roles,
//! and changing passwords under role-based authorization.
//!
//! ## Architecture
//!
//! - **Services**: business rules over the user store
//! - **Types**: caller identity and shared constants
//! - **Utils**: password hashing internals
//!
//! Persistence lives in `padron-database`; this crate talks to it through
//! the [`UserStore`] seam so tests can substitute an in-memory store.

pub mod services;
pub mod types;
pub mod utils;

// Re-export database types and repositories
pub use padron_database::{
    AccountError, AccountResult, ChangePasswordRequest, CreateUserRequest, ErrorKind, Role,
    RoleRepository, UpdateUserRequest, User, UserRepository,
};

// Re-export main types for convenience
pub use services::{AccountService, MockUserRepository, UserStore};
pub use types::{Caller, ADMIN_ROLE};
pub use utils::password::{hash_password, verify_password};
