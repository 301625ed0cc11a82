//! Password hashing and verification

use crate::error::AuthError;

/// bcrypt work factor for newly stored hashes
pub const BCRYPT_COST: u32 = 10;

/// Hash a password with bcrypt at `BCRYPT_COST`
///
/// bcrypt generates a random per-record salt and embeds it, with the cost,
/// in the returned `$2b$` string.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    bcrypt::hash(password, BCRYPT_COST).map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Verify a password against a stored bcrypt hash
///
/// Returns `Ok(false)` on mismatch; an unparseable stored hash is an error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    bcrypt::verify(password, hash).map_err(|e| AuthError::PasswordHash(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("1234").unwrap();
        assert!(hash.starts_with("$2b$10$"));

        assert!(verify_password("1234", &hash).unwrap());
        assert!(!verify_password("4321", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("1234").unwrap();
        let second = hash_password("1234").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_verifies_hashes_from_other_bcrypt_producers() {
        // $2a$ and $2y$ hashes written by other bcrypt libraries verify too
        let hash = hash_password("1234").unwrap();
        let legacy_2a = hash.replacen("$2b$", "$2a$", 1);
        let legacy_2y = hash.replacen("$2b$", "$2y$", 1);

        assert!(verify_password("1234", &legacy_2a).unwrap());
        assert!(verify_password("1234", &legacy_2y).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_error() {
        assert!(verify_password("1234", "not-a-bcrypt-string").is_err());
    }
}
