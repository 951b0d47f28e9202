//! pwseal - password-based authenticated encryption of text
//!
//! Seals a string under a password and returns an [`Envelope`] of three
//! base64 fields: the AES-256-GCM ciphertext (tag appended), the 12-byte
//! nonce, and the 16-byte PBKDF2 salt. The same password opens it again;
//! anything else fails with [`SealError::DecryptionFailed`].
//!
//! # Architecture
//!
//! - `crypto`: key derivation, base64 encoding, encryption and decryption
//! - `error`: the error taxonomy
//! - `worker`: async wrappers over the blocking calls (feature `async`)
//! - `config` and `cli`: the command-line front end
//!
//! # Example
//!
//! ```rust
//! let envelope = pwseal::encrypt("hello world", "correct-horse")?;
//! assert_eq!(pwseal::decrypt(&envelope, "correct-horse")?, "hello world");
//! assert!(pwseal::decrypt(&envelope, "wrong-password").is_err());
//! # Ok::<(), pwseal::SealError>(())
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;

#[cfg(feature = "async")]
pub mod worker;

pub use crypto::{decrypt, encrypt, Envelope, Password};
pub use error::{SealError, SealResult};
