//! Password hashing utilities
//!
//! Single-round unsalted SHA-256, matching the hashes already stored in
//! the production database. Hardening the scheme would orphan every
//! existing account record, so it stays as-is for now.

use sha2::{Digest, Sha256};

/// Hash a password to lowercase hex.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Verify a password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> bool {
    hash_password(password) == hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = "secure_password_123";
        let hashed = hash_password(password);

        assert!(verify_password(password, &hashed));
        assert!(!verify_password("wrong_password", &hashed));
    }

    #[test]
    fn hash_is_hex_sha256() {
        let hashed = hash_password("abc");
        assert_eq!(hashed.len(), 64);
        assert!(hashed.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(hashed, hash_password("abd"));
    }
}
