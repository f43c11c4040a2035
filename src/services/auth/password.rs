/*
 * Responsibility
 * - Argon2 password hashing (PHC string, random salt)
 * - Constant-time verification delegated to the hash primitive
 */
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HashError {
    #[error("password hashing failed")]
    HashingFailed,
}

/// Hash a plaintext password into a PHC-format string (salt included).
pub fn hash(password: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| HashError::HashingFailed)?;

    Ok(hash.to_string())
}

/// Compare a supplied plaintext against a stored hash.
///
/// Returns `false` for any mismatch, including a malformed stored hash, so
/// callers cannot tell the failure modes apart (and must treat "record not
/// found" the same way).
pub fn verify(stored_hash: &str, supplied: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(supplied.as_bytes(), &parsed)
        .is_ok()
}
