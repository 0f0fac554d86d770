//! Account password storage.
//!
//! A password is checked against the account rules before it is hashed, so
//! every stored credential satisfies them. Hashes are Argon2id PHC strings
//! with a fresh salt each time.

use argon2::password_hash::{PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash};
use artha_shared::AppError;
use thiserror::Error;

use super::credentials::{CredentialError, validate_password};

/// Errors from storing or checking an account password.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// The new password breaks an account rule; nothing was hashed.
    #[error(transparent)]
    Rejected(#[from] CredentialError),

    /// The stored credential is not a PHC string.
    #[error("stored password hash is malformed")]
    MalformedHash,

    /// Argon2 itself failed.
    #[error("argon2: {0}")]
    Argon2(String),
}

impl From<PasswordError> for AppError {
    fn from(e: PasswordError) -> Self {
        match e {
            PasswordError::Rejected(rule) => rule.into(),
            PasswordError::MalformedHash | PasswordError::Argon2(_) => Self::Internal(e.to_string()),
        }
    }
}

/// Validates `password` and returns its Argon2id hash for storage.
///
/// # Errors
///
/// - `PasswordError::Rejected` if the password is blank or too short
/// - `PasswordError::Argon2` if hashing fails
///
/// # Example
///
/// ```
/// use artha_core::auth::hash_password;
///
/// let hash = hash_password("correct horse battery").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// assert!(hash_password("short").is_err());
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    validate_password(password)?;

    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::Argon2(e.to_string()))
}

/// Checks a login attempt against the stored hash.
///
/// Attempts are not held to the account rules; a short attempt simply does
/// not match.
///
/// # Errors
///
/// - `PasswordError::MalformedHash` if `stored` cannot be parsed
/// - `PasswordError::Argon2` for any failure other than a mismatch
pub fn verify_password(attempt: &str, stored: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(stored).map_err(|_| PasswordError::MalformedHash)?;

    match Argon2::default().verify_password(attempt.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::Argon2(e.to_string())),
    }
}
