//! Error types for the account management system.

use thiserror::Error;

/// Account-related errors. Every failure of a service operation surfaces as
/// one of these variants, unmodified, for the presentation layer to map to a
/// user-facing message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("user not found")]
    UserNotFound,

    #[error("username unavailable")]
    UsernameUnavailable,

    #[error("national id unavailable")]
    DuiUnavailable,

    #[error("password confirmation required")]
    ConfirmationRequired,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("new password must differ from the current password")]
    PasswordReused,

    #[error("new password and confirmation do not match")]
    NewPasswordMismatch,

    #[error("invalid current password")]
    InvalidCurrentPassword,

    #[error("admin role required")]
    AdminRequired,

    #[error("password hashing failed")]
    PasswordHashingFailed,

    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Coarse classification of an [`AccountError`], matching the four buckets
/// the presentation layer distinguishes when rendering failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// User-correctable input problem.
    Validation,
    /// Referenced id or username does not resolve to a live record.
    NotFound,
    /// Caller lacks the role a restricted operation requires.
    Authorization,
    /// Supplied current password does not match the stored hash.
    Authentication,
    /// Infrastructure failure; nothing the caller can correct.
    Internal,
}

impl AccountError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::UsernameUnavailable
            | AccountError::DuiUnavailable
            | AccountError::ConfirmationRequired
            | AccountError::PasswordMismatch
            | AccountError::PasswordReused
            | AccountError::NewPasswordMismatch => ErrorKind::Validation,
            AccountError::UserNotFound => ErrorKind::NotFound,
            AccountError::AdminRequired => ErrorKind::Authorization,
            AccountError::InvalidCurrentPassword => ErrorKind::Authentication,
            AccountError::PasswordHashingFailed | AccountError::DatabaseError(_) => {
                ErrorKind::Internal
            }
        }
    }
}

/// Database infrastructure errors (connection, migration).
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("connection error: {0}")]
    ConnectionError(String),

    #[error("migration error: {0}")]
    MigrationError(String),
}

/// Result types for account and infrastructure operations
pub type AccountResult<T> = Result<T, AccountError>;
pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// Convert database errors to our error types. A UNIQUE-constraint violation
/// on `username` or `dui` is the store-level backstop for the availability
/// pre-checks, so it maps to the same error the pre-check produces.
impl From<sqlx::Error> for AccountError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AccountError::UserNotFound,
            sqlx::Error::Database(db_err) => {
                let message = db_err.message();
                if message.contains("UNIQUE constraint failed") {
                    if message.contains("username") {
                        AccountError::UsernameUnavailable
                    } else if message.contains("dui") {
                        AccountError::DuiUnavailable
                    } else {
                        AccountError::DatabaseError(message.to_string())
                    }
                } else {
                    AccountError::DatabaseError(message.to_string())
                }
            }
            _ => AccountError::DatabaseError(err.to_string()),
        }
    }
}
