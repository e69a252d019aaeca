//! JWT type definitions

use serde::Serialize;
use serde_json::{Map, Value};

/// The only signing algorithm this crate issues or verifies
pub const ALGORITHM: &str = "HS256";

/// Header `typ` value
pub const TOKEN_TYPE: &str = "JWT";

/// Claims payload. Keys keep their insertion order through encoding.
pub type Payload = Map<String, Value>;

/// JWT header structure
///
/// Always `{"typ":"JWT","alg":"HS256"}`. Field order is part of the wire
/// format, so `typ` is declared first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JwtHeader {
    /// Token type
    pub typ: &'static str,
    /// Signing algorithm
    pub alg: &'static str,
}

impl JwtHeader {
    /// The fixed HS256 header
    #[must_use]
    pub fn hs256() -> Self {
        Self {
            typ: TOKEN_TYPE,
            alg: ALGORITHM,
        }
    }
}

impl Default for JwtHeader {
    fn default() -> Self {
        Self::hs256()
    }
}

/// The three encoded segments of a structurally well-formed token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenParts<'a> {
    /// Base64URL header segment
    pub header: &'a str,
    /// Base64URL payload segment
    pub payload: &'a str,
    /// Base64URL signature segment
    pub signature: &'a str,
}

impl TokenParts<'_> {
    /// `header.payload`, the bytes the signature is computed over
    #[must_use]
    pub fn signing_input(&self) -> String {
        format!("{}.{}", self.header, self.payload)
    }
}

/// JWT token string wrapper
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JwtToken(pub String);

impl JwtToken {
    /// Split into segments, `None` unless there are exactly three non-empty ones
    #[must_use]
    pub fn parts(&self) -> Option<TokenParts<'_>> {
        crate::codec::split_token(&self.0)
    }

    /// Consume the wrapper
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for JwtToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl AsRef<str> for JwtToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JwtToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
