//! Custom error types for pwseal
//!
//! This module defines the error hierarchy for the library and CLI using
//! thiserror for ergonomic error definitions.
//!
//! Decryption deliberately has a single user-visible failure kind. Whether
//! the envelope was malformed, the password wrong, or the data tampered with,
//! callers only ever see [`SealError::DecryptionFailed`].

use thiserror::Error;

/// The main error type for pwseal operations
#[derive(Error, Debug)]
pub enum SealError {
    /// An envelope field is not valid base64
    ///
    /// Returned by [`crate::crypto::decode`]. The decryptor folds it into
    /// [`SealError::DecryptionFailed`] before it reaches a caller.
    #[error("Malformed encoding: {0}")]
    MalformedEncoding(String),

    /// Wrong password, tampered or truncated envelope, or invalid UTF-8
    #[error("Decryption failed: invalid password or corrupted data")]
    DecryptionFailed,

    /// The operating system could not supply secure random bytes
    #[error("Secure random source unavailable: {0}")]
    RandomSourceUnavailable(String),

    /// Cipher setup or sealing errors
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// A background worker died before producing a result
    #[error("Worker error: {0}")]
    Worker(String),
}

impl SealError {
    /// Check if this is the collapsed decryption failure
    pub fn is_decryption_failure(&self) -> bool {
        matches!(self, Self::DecryptionFailed)
    }
}

impl From<std::io::Error> for SealError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SealError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for SealError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for pwseal operations
pub type SealResult<T> = Result<T, SealError>;
