//! HS256 shared secret handling

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Recommended minimum HS256 key length in bytes (256 bits)
pub const RECOMMENDED_KEY_SIZE: usize = 32;

/// Owned HS256 shared secret
///
/// Wiped from memory on drop. `Debug` output shows only the length.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    /// Wrap raw key bytes
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Raw key bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Key length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the key is zero-length
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the key meets [`RECOMMENDED_KEY_SIZE`]
    #[must_use]
    pub fn is_recommended_length(&self) -> bool {
        self.0.len() >= RECOMMENDED_KEY_SIZE
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}

impl AsRef<[u8]> for SecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for SecretKey {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for SecretKey {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for SecretKey {
    fn from(bytes: &[u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<&str> for SecretKey {
    fn from(secret: &str) -> Self {
        Self(secret.as_bytes().to_vec())
    }
}

/// Log a warning for keys below [`RECOMMENDED_KEY_SIZE`]. They still work.
pub(crate) fn warn_if_short(key: &[u8]) {
    if key.len() < RECOMMENDED_KEY_SIZE {
        tracing::warn!(
            key_len = key.len(),
            recommended = RECOMMENDED_KEY_SIZE,
            "HS256 key is shorter than recommended"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_key_material() {
        let key = SecretKey::from("qwertyuiopasdfghjklzxcvbnm123456");
        let debug = format!("{key:?}");
        assert!(debug.contains("len: 32"));
        assert!(!debug.contains("qwerty"));
    }

    #[test]
    fn recommended_length() {
        assert!(SecretKey::from(&[7u8; 32]).is_recommended_length());
        assert!(!SecretKey::from(b"short").is_recommended_length());
        assert!(SecretKey::new(Vec::new()).is_empty());
    }
}
