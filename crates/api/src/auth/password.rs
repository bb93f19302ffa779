//! Argon2id password hashing and verification.
//!
//! Hashes are stored as PHC strings, so the salt and parameters travel with
//! the hash. Failures other than a plain mismatch are internal errors.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use todo_core::error::CoreError;

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, CoreError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| CoreError::Internal(format!("Password hashing error: {e}")))
}

/// Check `password` against a stored hash.
///
/// A stored value that is not a PHC string is an error, not a mismatch.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, CoreError> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| CoreError::Internal(format!("Stored password hash is malformed: {e}")))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(CoreError::Internal(format!(
            "Password verification error: {e}"
        ))),
    }
}
