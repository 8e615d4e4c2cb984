//! Database repository implementations

pub mod role_repository;
pub mod user_repository;

// Re-export all repositories for convenience
pub use role_repository::*;
pub use user_repository::*;
