//! Key derivation using PBKDF2-HMAC-SHA256
//!
//! Turns a password and a random salt into the 256-bit AES key for one
//! encrypt or decrypt call. The derivation is deterministic: the decryptor
//! reproduces the encryptor's key from the salt stored in the envelope.

use std::fmt;

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::SealResult;

use super::random::random_array;

/// Length of the salt in bytes (128 bits)
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256)
pub const KEY_LEN: usize = 32;

/// Fixed PBKDF2 iteration count
///
/// Envelopes carry no parameters, so changing this breaks every envelope
/// produced before the change.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// A derived encryption key, wiped when dropped
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derive an encryption key from a password and salt
///
/// Accepts any password, the empty one included.
pub fn derive_key(password: &str, salt: &[u8]) -> DerivedKey {
    let mut key = DerivedKey {
        key: [0u8; KEY_LEN],
    };
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key.key);
    key
}

/// Generate a fresh random salt
pub fn generate_salt() -> SealResult<[u8; SALT_LEN]> {
    random_array()
}
