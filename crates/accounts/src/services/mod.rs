//! Business logic services for the account management system.
//!
//! Services coordinate between the user store and the password utilities
//! and enforce the business rules for account operations.

pub mod account_service;
mod mock_repositories;

// Re-export all services
pub use account_service::{AccountService, UserStore};
pub use mock_repositories::MockUserRepository;
