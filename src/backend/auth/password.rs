/**
 * Password Hashing
 *
 * bcrypt-based one-way hashing and verification of user passwords.
 *
 * # Security
 *
 * - Every hash carries its own random salt and cost factor
 * - Verification compares digests in constant time (inside `bcrypt`)
 * - A stored hash that cannot be parsed verifies as `false`, the same
 *   outcome as a wrong password
 */

use thiserror::Error;

/// Lowest cost bcrypt accepts; used by tests to keep hashing fast.
pub const MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts.
pub const MAX_COST: u32 = 31;

/// Hashing failed for a reason unrelated to the password itself
#[derive(Debug, Error)]
#[error("password hashing failed: {0}")]
pub struct HashingError(String);

impl HashingError {
    /// The blocking task running the hash was cancelled or panicked
    pub(crate) fn from_join(reason: String) -> Self {
        Self(format!("hashing task failed: {reason}"))
    }
}

impl From<bcrypt::BcryptError> for HashingError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self(err.to_string())
    }
}

/// Credential hasher
///
/// Cheap to copy; the cost factor comes from `AuthConfig::bcrypt_cost`.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost (`MIN_COST..=MAX_COST`)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password with a fresh salt
    pub fn hash(&self, password: &str) -> Result<String, HashingError> {
        Ok(bcrypt::hash(password, self.cost)?)
    }

    /// Check a password against a stored hash
    pub fn verify(&self, hash: &str, password: &str) -> bool {
        match bcrypt::verify(password, hash) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!("Stored password hash could not be verified: {}", e);
                false
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
