//! Claims building and extraction.
//!
//! [`ClaimsBuilder`] produces a [`Payload`] whose keys keep the order they were
//! added in, which is the order they are signed in. [`ClaimsExtractor`] reads
//! typed values back out of a decoded payload.

use crate::types::Payload;
use crate::validation::{Deadline, exp_deadline};
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

/// Builder for an insertion-ordered claims payload.
#[derive(Debug, Clone, Default)]
pub struct ClaimsBuilder {
    claims: Payload,
}

impl ClaimsBuilder {
    /// Create a new claims builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a claim. Re-adding a key replaces the value in its original position.
    #[must_use]
    pub fn claim(mut self, k: impl Into<String>, v: impl Into<Value>) -> Self {
        self.claims.insert(k.into(), v.into());
        self
    }

    /// Set the subject (sub) claim.
    #[must_use]
    pub fn subject(self, sub: impl Into<String>) -> Self {
        self.claim("sub", Value::String(sub.into()))
    }

    /// Set the issuer (iss) claim.
    #[must_use]
    pub fn issuer(self, iss: impl Into<String>) -> Self {
        self.claim("iss", Value::String(iss.into()))
    }

    /// Set the audience (aud) claim.
    #[must_use]
    pub fn audience(self, aud: impl Into<String>) -> Self {
        self.claim("aud", Value::String(aud.into()))
    }

    /// Set the issued-at (iat) claim.
    #[must_use]
    pub fn issued_at(self, iat: DateTime<Utc>) -> Self {
        self.claim("iat", iat.timestamp())
    }

    /// Set the issued-at time to now.
    #[must_use]
    pub fn issued_now(self) -> Self {
        self.issued_at(Utc::now())
    }

    /// Set the expiry (exp) claim.
    #[must_use]
    pub fn expires_at(self, exp: DateTime<Utc>) -> Self {
        self.claim("exp", exp.timestamp())
    }

    /// Set the expiration time relative to now.
    ///
    /// Offsets past the representable range clamp to the latest (or earliest)
    /// representable time.
    #[must_use]
    pub fn expires_in(self, dur: Duration) -> Self {
        let exp = Utc::now().checked_add_signed(dur).unwrap_or_else(|| {
            tracing::warn!(seconds = dur.num_seconds(), "expiry offset out of range, clamping");
            if dur < Duration::zero() {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            }
        });
        self.expires_at(exp)
    }

    /// Build the claims.
    #[must_use]
    pub fn build(self) -> Payload {
        self.claims
    }
}

/// Claims extractor for common claim types
pub struct ClaimsExtractor;

impl ClaimsExtractor {
    /// Extract subject claim
    #[inline]
    #[must_use]
    pub fn subject(claims: &Payload) -> Option<&str> {
        claims.get("sub").and_then(Value::as_str)
    }

    /// Extract issuer claim
    #[inline]
    #[must_use]
    pub fn issuer(claims: &Payload) -> Option<&str> {
        claims.get("iss").and_then(Value::as_str)
    }

    /// Extract audience claim, either a single string or an array of strings
    #[must_use]
    pub fn audience(claims: &Payload) -> Option<Vec<String>> {
        match claims.get("aud")? {
            Value::String(aud) => Some(vec![aud.clone()]),
            Value::Array(items) => Some(
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Extract expiration time: the last Unix second the token is valid at.
    ///
    /// Reads `exp` the way expiry validation does, so fractional, string and
    /// out-of-range values give the second validation enforces. `None` when the
    /// token never expires.
    #[inline]
    #[must_use]
    pub fn expiration(claims: &Payload) -> Option<i64> {
        exp_deadline(claims).map(Deadline::last_valid_second)
    }

    /// Extract issued at time
    #[inline]
    #[must_use]
    pub fn issued_at(claims: &Payload) -> Option<i64> {
        claims.get("iat").and_then(Value::as_i64)
    }

    /// Expiration as a UTC timestamp
    #[must_use]
    pub fn expires_at(claims: &Payload) -> Option<DateTime<Utc>> {
        Self::expiration(claims).and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    /// Extract custom claim as string
    #[inline]
    #[must_use]
    pub fn custom_string(claims: &Payload, claim: &str) -> Option<String> {
        claims
            .get(claim)
            .and_then(|v| v.as_str().map(str::to_string))
    }

    /// Extract custom claim as number
    #[inline]
    #[must_use]
    pub fn custom_number(claims: &Payload, claim: &str) -> Option<i64> {
        claims.get(claim).and_then(Value::as_i64)
    }

    /// Extract custom claim as boolean
    #[inline]
    #[must_use]
    pub fn custom_bool(claims: &Payload, claim: &str) -> Option<bool> {
        claims.get(claim).and_then(Value::as_bool)
    }
}
