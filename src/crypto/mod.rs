//! Cryptographic core of pwseal
//!
//! Provides AES-256-GCM encryption with PBKDF2-HMAC-SHA256 key derivation
//! for sealing a single string under a password.

pub mod encoding;
pub mod encryption;
pub mod key_derivation;
pub mod random;
pub mod secure_memory;

pub use encoding::{decode, encode};
pub use encryption::{
    decrypt, decrypt_bytes, encrypt, encrypt_bytes, Envelope, NONCE_LEN, TAG_LEN,
};
pub use key_derivation::{derive_key, DerivedKey, KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN};
pub use secure_memory::Password;
