//! Access to the operating system's secure random source
//!
//! Salts and nonces come from here. A failure is reported once and never
//! retried or papered over with a weaker generator.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;

use crate::error::{SealError, SealResult};

/// Fill `dest` with cryptographically secure random bytes
pub fn fill_random(dest: &mut [u8]) -> SealResult<()> {
    OsRng.try_fill_bytes(dest).map_err(|e| {
        tracing::error!(error = %e, "operating system random source failed");
        SealError::RandomSourceUnavailable(e.to_string())
    })
}

/// Produce a fresh array of `N` secure random bytes
pub fn random_array<const N: usize>() -> SealResult<[u8; N]> {
    let mut bytes = [0u8; N];
    fill_random(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_array_fills() {
        let bytes: [u8; 32] = random_array().unwrap();
        // 2^-256 chance of a false failure
        assert_ne!(bytes, [0u8; 32]);
    }

    #[test]
    fn test_consecutive_draws_differ() {
        let a: [u8; 16] = random_array().unwrap();
        let b: [u8; 16] = random_array().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_fill_empty_slice() {
        let mut empty: [u8; 0] = [];
        assert!(fill_random(&mut empty).is_ok());
    }
}
