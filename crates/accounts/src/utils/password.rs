//! Password hashing and verification utilities.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use padron_database::AccountError;

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> Result<String, AccountError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AccountError::PasswordHashingFailed)?
        .to_string();

    Ok(password_hash)
}

/// Verify a password against its hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AccountError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AccountError::PasswordHashingFailed)?;

    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(_) => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing() {
        let password = "Secret1";
        let hash = hash_password(password).unwrap();

        assert_ne!(hash, password);
        assert!(verify_password(password, &hash).unwrap());
        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("Secret1").unwrap();
        let second = hash_password("Secret1").unwrap();

        assert_ne!(first, second);
        assert!(verify_password("Secret1", &first).unwrap());
        assert!(verify_password("Secret1", &second).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let result = verify_password("Secret1", "not-a-phc-string");
        assert_eq!(result, Err(AccountError::PasswordHashingFailed));
    }
}
