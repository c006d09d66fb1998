//! Password hashing built around PBKDF2-HMAC-SHA256.
//! The configuration is centralized so that every password-like value uses
//! the same salt length, key length, and iteration count.

use hmac::Hmac;
use pbkdf2::pbkdf2;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use thiserror::Error;
use zeroize::Zeroize;

/// Iteration count applied to every derived credential. Fixed so a stored
/// hash can be re-derived for verification without a parameter header.
pub const PBKDF2_ITERATIONS: u32 = 100_000;
/// Random salt length in bytes; the salt is prefixed onto each stored hash.
pub const SALT_LEN: usize = 16;
/// Derived key length in bytes.
pub const DERIVED_KEY_LEN: usize = 32;

#[derive(Debug, Error)]
pub enum KdfError {
    #[error("key derivation failed: {0}")]
    DerivationFailed(String),
}

fn derive_key(
    plaintext: &[u8],
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<(), KdfError> {
    pbkdf2::<Hmac<Sha256>>(plaintext, salt, iterations, out)
        .map_err(|e| KdfError::DerivationFailed(format!("{e}")))
}

/// Hashes a password with PBKDF2-HMAC-SHA256 under a fresh random salt.
/// The returned buffer is `salt || derived_key`, so the hash carries
/// everything verification needs.
pub fn hash_password(plaintext: &str) -> Result<Vec<u8>, KdfError> {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);

    let mut stored = vec![0u8; SALT_LEN + DERIVED_KEY_LEN];
    stored[..SALT_LEN].copy_from_slice(&salt);
    derive_key(
        plaintext.as_bytes(),
        &salt,
        PBKDF2_ITERATIONS,
        &mut stored[SALT_LEN..],
    )?;
    Ok(stored)
}

/// Verifies a plaintext password against a stored `salt || key` hash.
/// Returns `true` when the password matches, and `false` when verification
/// fails or the stored hash is malformed.
pub fn verify_password(plaintext: &str, stored: &[u8]) -> bool {
    if stored.len() != SALT_LEN + DERIVED_KEY_LEN {
        return false;
    }
    let (salt, expected) = stored.split_at(SALT_LEN);

    let mut candidate = [0u8; DERIVED_KEY_LEN];
    if derive_key(plaintext.as_bytes(), salt, PBKDF2_ITERATIONS, &mut candidate).is_err() {
        return false;
    }
    let matches = constant_time_eq(&candidate, expected);
    candidate.zeroize();
    matches
}

/// Compares two equal-length byte strings without short-circuiting, so the
/// comparison time does not depend on the length of the matching prefix.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::{
        derive_key, hash_password, verify_password, DERIVED_KEY_LEN, SALT_LEN,
    };

    #[test]
    fn hashes_and_verifies_passwords() {
        let stored = hash_password("prentice-test-password").expect("hashing should succeed");
        assert_eq!(stored.len(), SALT_LEN + DERIVED_KEY_LEN);
        assert!(verify_password("prentice-test-password", &stored));
        assert!(!verify_password("wrong-password", &stored));
    }

    #[test]
    fn salts_make_hashes_unique() {
        let first = hash_password("same-password").expect("hashing should succeed");
        let second = hash_password("same-password").expect("hashing should succeed");
        assert_ne!(first, second);
        assert!(verify_password("same-password", &first));
        assert!(verify_password("same-password", &second));
    }

    #[test]
    fn malformed_stored_hashes_never_verify() {
        let stored = hash_password("anything").expect("hashing should succeed");
        assert!(!verify_password("anything", &stored[..stored.len() - 1]));
        assert!(!verify_password("anything", b""));
    }

    #[test]
    fn matches_published_hmac_sha256_vectors() {
        let mut out = [0u8; 32];
        derive_key(b"password", b"salt", 1, &mut out).expect("derivation should succeed");
        assert_eq!(
            hex::encode(out),
            "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
        );

        derive_key(b"password", b"salt", 4096, &mut out).expect("derivation should succeed");
        assert_eq!(
            hex::encode(out),
            "c5e478d59288c841aa530db6845c4c8d962893a001ce4e11a4963873aa98134a"
        );
    }
}
