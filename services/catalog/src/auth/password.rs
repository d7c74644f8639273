//! Password hashing helpers.
//!
//! # Purpose
//! Wraps Argon2id hashing and one-way verification of stored password hashes
//! (PHC strings with embedded salt). Login is the only caller of
//! verification; hashing exists for seeding tooling and tests.
use anyhow::{Result, anyhow};
use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

/// Hash a plaintext password into an Argon2id PHC string.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| anyhow!("hash password: {err}"))
}

/// Verify a plaintext password against a stored PHC hash.
///
/// An unparseable stored hash verifies as `false` rather than erroring, so a
/// corrupted credential row degrades into the same generic login failure as a
/// wrong password.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrips() {
        let hash = hash_password("testPass").expect("hash");
        assert!(verify_password("testPass", &hash));
        assert!(!verify_password("wrongPass", &hash));
    }

    #[test]
    fn hashes_are_salted() {
        let first = hash_password("testPass").expect("hash");
        let second = hash_password("testPass").expect("hash");
        assert_ne!(first, second);
    }

    #[test]
    fn unparseable_stored_hash_never_verifies() {
        assert!(!verify_password("testPass", "plainly-not-a-phc-string"));
    }
}
