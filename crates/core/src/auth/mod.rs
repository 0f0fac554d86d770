//! Authentication and password hashing.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - Password verification
//! - Normalization and validation of registration and profile fields

mod credentials;
mod password;

pub use credentials::{
    CredentialError, DEFAULT_AVATAR_URL, MIN_PASSWORD_LEN, MIN_USERNAME_LEN, NewUser, ProfileChanges,
    normalize_email, normalize_username, validate_full_name, validate_password,
};
pub use password::{PasswordError, hash_password, verify_password};
