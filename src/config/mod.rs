//! Configuration module for the pwseal CLI
//!
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SealPaths;
pub use settings::{EnvelopeFormat, Settings};
