//! Async wrappers that keep key derivation off the async executor
//!
//! PBKDF2 at 100,000 rounds is CPU-bound. These helpers move each call onto
//! tokio's blocking pool. Inputs are owned so nothing borrowed has to outlive
//! the caller; the password is wiped when the worker finishes.

use tokio::task;

use crate::crypto::{self, Envelope, Password};
use crate::error::{SealError, SealResult};

/// Encrypt on the blocking pool
pub async fn encrypt_async(plaintext: String, password: Password) -> SealResult<Envelope> {
    task::spawn_blocking(move || crypto::encrypt(&plaintext, &password))
        .await
        .map_err(|e| SealError::Worker(e.to_string()))?
}

/// Decrypt on the blocking pool
pub async fn decrypt_async(envelope: Envelope, password: Password) -> SealResult<String> {
    task::spawn_blocking(move || crypto::decrypt(&envelope, &password))
        .await
        .map_err(|e| SealError::Worker(e.to_string()))?
}
