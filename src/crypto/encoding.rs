//! Base64 text encoding for envelope fields
//!
//! Standard alphabet, padded, no line wrapping.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{SealError, SealResult};

/// Encode bytes as standard padded base64
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode standard padded base64 back to bytes
pub fn decode(text: &str) -> SealResult<Vec<u8>> {
    STANDARD
        .decode(text)
        .map_err(|e| SealError::MalformedEncoding(e.to_string()))
}
