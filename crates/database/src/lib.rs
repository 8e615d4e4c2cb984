//! Padron Database Crate
//!
//! This crate provides database functionality for the Padron account backend,
//! including connection management, migrations, and repository implementations.

use padron_config::DatabaseConfig;
use sqlx::SqlitePool;

pub mod connection;
pub mod entities;
pub mod migrations;
pub mod repos;
pub mod types;

pub use connection::prepare_database;
pub use migrations::run_migrations;

// Re-export repositories
pub use repos::{RoleRepository, UserRepository};

// Re-export entities
pub use entities::{ChangePasswordRequest, CreateUserRequest, Role, UpdateUserRequest, User};

// Re-export types
pub use types::{AccountError, AccountResult, DatabaseError, DatabaseResult, ErrorKind};

/// Initialize the database with migrations
pub async fn initialize_database(config: &DatabaseConfig) -> DatabaseResult<SqlitePool> {
    let pool = prepare_database(config)
        .await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    run_migrations(&pool)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;

    Ok(pool)
}
