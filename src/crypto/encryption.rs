//! AES-256-GCM envelope encryption/decryption
//!
//! Every call derives its own key from the password and a fresh random salt,
//! seals with a fresh random nonce, and hands back an [`Envelope`] of three
//! base64 fields. Decryption reverses this and reports every kind of failure
//! as the same [`SealError::DecryptionFailed`].

use std::fmt;

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{SealError, SealResult};

use super::encoding::{decode, encode};
use super::key_derivation::{derive_key, generate_salt, DerivedKey, SALT_LEN};
use super::random::random_array;

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_LEN: usize = 12;

/// Size of the authentication tag appended to every ciphertext (128 bits)
pub const TAG_LEN: usize = 16;

/// The output of one encryption call
///
/// All three fields must come from the same call. The caller is responsible
/// for keeping them together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Ciphertext with the GCM tag appended (base64)
    pub ciphertext: String,
    /// The nonce used for this encryption (base64)
    #[serde(alias = "iv")]
    pub nonce: String,
    /// The key derivation salt (base64)
    pub salt: String,
}

/// Envelope field names, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Ciphertext,
    Nonce,
    Salt,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Ciphertext => "ciphertext",
            Field::Nonce => "nonce",
            Field::Salt => "salt",
        })
    }
}

/// Why a decryption failed
///
/// Only ever logged. Callers see [`SealError::DecryptionFailed`] regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailureReason {
    MalformedEncoding(Field),
    InvalidLength(Field),
    Authentication,
    InvalidUtf8,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::MalformedEncoding(field) => write!(f, "malformed {} encoding", field),
            FailureReason::InvalidLength(field) => write!(f, "invalid {} length", field),
            FailureReason::Authentication => f.write_str("authentication tag mismatch"),
            FailureReason::InvalidUtf8 => f.write_str("plaintext is not valid UTF-8"),
        }
    }
}

impl From<FailureReason> for SealError {
    fn from(reason: FailureReason) -> Self {
        tracing::debug!(%reason, "decryption failed");
        SealError::DecryptionFailed
    }
}

/// Envelope fields decoded back to raw bytes
struct DecodedEnvelope {
    salt: [u8; SALT_LEN],
    nonce: [u8; NONCE_LEN],
    ciphertext: Vec<u8>,
}

impl DecodedEnvelope {
    fn from_envelope(envelope: &Envelope) -> Result<Self, FailureReason> {
        let salt = decode_fixed::<SALT_LEN>(&envelope.salt, Field::Salt)?;
        let nonce = decode_fixed::<NONCE_LEN>(&envelope.nonce, Field::Nonce)?;

        let ciphertext = decode(&envelope.ciphertext)
            .map_err(|_| FailureReason::MalformedEncoding(Field::Ciphertext))?;
        if ciphertext.len() < TAG_LEN {
            return Err(FailureReason::InvalidLength(Field::Ciphertext));
        }

        Ok(Self {
            salt,
            nonce,
            ciphertext,
        })
    }
}

fn decode_fixed<const N: usize>(text: &str, field: Field) -> Result<[u8; N], FailureReason> {
    let bytes = decode(text).map_err(|_| FailureReason::MalformedEncoding(field))?;
    bytes
        .try_into()
        .map_err(|_| FailureReason::InvalidLength(field))
}

fn cipher_for(key: &DerivedKey) -> Aes256Gcm {
    Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()))
}

/// Seal plaintext under an already-derived key
fn seal(key: &DerivedKey, nonce: &[u8; NONCE_LEN], plaintext: &[u8]) -> SealResult<Vec<u8>> {
    cipher_for(key)
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|e| SealError::Encryption(format!("Encryption failed: {}", e)))
}

/// Open a ciphertext under an already-derived key, verifying the tag first
fn open(
    key: &DerivedKey,
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>, FailureReason> {
    cipher_for(key)
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map(Zeroizing::new)
        .map_err(|_| FailureReason::Authentication)
}

fn into_utf8(mut plaintext: Zeroizing<Vec<u8>>) -> Result<String, FailureReason> {
    let raw = std::mem::take(&mut *plaintext);
    String::from_utf8(raw).map_err(|e| {
        let mut rejected = e.into_bytes();
        rejected.zeroize();
        FailureReason::InvalidUtf8
    })
}

fn decrypt_inner(envelope: &Envelope, password: &str) -> Result<Zeroizing<Vec<u8>>, FailureReason> {
    let decoded = match DecodedEnvelope::from_envelope(envelope) {
        Ok(decoded) => decoded,
        Err(reason) => {
            // A malformed envelope must take as long to reject as a wrong password
            std::hint::black_box(derive_key(password, &[0u8; SALT_LEN]));
            return Err(reason);
        }
    };
    let key = derive_key(password, &decoded.salt);
    open(&key, &decoded.nonce, &decoded.ciphertext)
}

/// Encrypt raw bytes with a password
///
/// Generates a fresh salt and nonce for every call, so encrypting the same
/// input twice never yields the same envelope.
pub fn encrypt_bytes(plaintext: &[u8], password: &str) -> SealResult<Envelope> {
    let salt = generate_salt()?;
    let nonce: [u8; NONCE_LEN] = random_array()?;

    let key = derive_key(password, &salt);
    let ciphertext = seal(&key, &nonce, plaintext)?;

    tracing::debug!(ciphertext_len = ciphertext.len(), "sealed envelope");

    Ok(Envelope {
        ciphertext: encode(&ciphertext),
        nonce: encode(&nonce),
        salt: encode(&salt),
    })
}

/// Encrypt a string with a password
pub fn encrypt(plaintext: &str, password: &str) -> SealResult<Envelope> {
    encrypt_bytes(plaintext.as_bytes(), password)
}

/// Decrypt an envelope to raw bytes
///
/// The returned buffer is wiped when dropped.
pub fn decrypt_bytes(envelope: &Envelope, password: &str) -> SealResult<Zeroizing<Vec<u8>>> {
    Ok(decrypt_inner(envelope, password)?)
}

/// Decrypt an envelope to a string
///
/// Fails with [`SealError::DecryptionFailed`] on a wrong password, any
/// modification of the envelope, or a plaintext that is not valid UTF-8.
pub fn decrypt(envelope: &Envelope, password: &str) -> SealResult<String> {
    let plaintext = decrypt_inner(envelope, password)?;
    Ok(into_utf8(plaintext)?)
}
