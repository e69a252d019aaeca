//! JWT error types

use thiserror::Error;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// JWT error types
///
/// Only [`JwtError::Encoding`], [`JwtError::CryptoProvider`] and
/// [`JwtError::TaskFailed`] ever reach callers of the token operations.
/// [`JwtError::Decoding`] is produced by the segment decoder and is folded into
/// an empty payload or a failed validation at every token-level entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Value could not be represented as JSON
    #[error("Encoding error: {0}")]
    Encoding(String),
    /// Segment is not valid Base64URL, UTF-8 or JSON
    #[error("Decoding error: {0}")]
    Decoding(String),
    /// HMAC-SHA256 provider rejected its inputs
    #[error("Crypto provider error: {0}")]
    CryptoProvider(String),
    /// Background task was dropped before it produced a result
    #[error("Background task failed")]
    TaskFailed,
}

impl JwtError {
    /// Create an encoding error
    #[inline]
    #[must_use]
    pub fn encoding(msg: &str) -> Self {
        JwtError::Encoding(msg.to_string())
    }

    /// Create a decoding error
    #[inline]
    #[must_use]
    pub fn decoding(msg: &str) -> Self {
        JwtError::Decoding(msg.to_string())
    }

    /// Create a crypto provider error
    #[inline]
    #[must_use]
    pub fn crypto_provider(msg: &str) -> Self {
        JwtError::CryptoProvider(msg.to_string())
    }

    /// Log this error at `error` level and hand it back unchanged
    #[inline]
    #[must_use]
    pub(crate) fn logged(self, context: &str) -> Self {
        tracing::error!(error = %self, "{context}");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        assert_eq!(
            JwtError::encoding("key must be a string").to_string(),
            "Encoding error: key must be a string"
        );
        assert_eq!(
            JwtError::crypto_provider("bad key").to_string(),
            "Crypto provider error: bad key"
        );
        assert_eq!(JwtError::TaskFailed.to_string(), "Background task failed");
    }

    #[test]
    fn logged_error_is_returned_unchanged() {
        let failed: JwtResult<bool> = Err(JwtError::crypto_provider("bad key"));
        assert_eq!(
            failed.map_err(|e| e.logged("HS256 verification failed")),
            Err(JwtError::crypto_provider("bad key"))
        );
    }
}
