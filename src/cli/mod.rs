//! CLI command handlers
//!
//! Bridges clap argument parsing with the crypto core.

pub mod seal;

pub use seal::{handle_decrypt, handle_encrypt, DecryptArgs, EncryptArgs, PasswordArgs};
