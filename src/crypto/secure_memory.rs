//! Secure memory handling for passwords
//!
//! [`Password`] wipes its heap buffer when dropped and never prints its
//! contents, so a password handed to the library does not linger in memory
//! or leak into logs.

use std::fmt;
use std::ops::Deref;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A UTF-8 password that is zeroed on drop
///
/// Any string is accepted, including the empty one. Strength policy belongs
/// to the caller.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Password {
    inner: String,
}

impl Password {
    /// Wrap a password
    pub fn new(s: impl Into<String>) -> Self {
        Self { inner: s.into() }
    }

    /// Get the password text
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Deref for Password {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl From<String> for Password {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Password {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Password {}

// Never show the contents
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("len", &self.inner.len())
            .finish()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.inner.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_creation() {
        let p = Password::new("correct-horse");
        assert_eq!(p.as_str(), "correct-horse");
        assert_eq!(p.len(), 13);
        assert!(!p.is_empty());
    }

    #[test]
    fn test_empty_password_allowed() {
        let p = Password::new("");
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
    }

    #[test]
    fn test_password_from_conversions() {
        let a: Password = String::from("secret").into();
        let b: Password = "secret".into();
        assert_eq!(a, b);
        assert_eq!(&*a, "secret");
    }

    #[test]
    fn test_password_debug_redacted() {
        let p = Password::new("hunter2");
        let debug = format!("{:?}", p);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("Password"));
        assert!(debug.contains("7"));
    }

    #[test]
    fn test_password_display_redacted() {
        let p = Password::new("hunter2");
        let display = format!("{}", p);
        assert!(!display.contains("hunter2"));
        assert!(display.contains("REDACTED"));
    }

    #[test]
    fn test_explicit_zeroize_clears() {
        let mut p = Password::new("wipe me");
        p.zeroize();
        assert!(p.is_empty());
    }
}
