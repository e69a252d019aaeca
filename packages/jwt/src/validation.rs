//! Token validation: options, expiry evaluation and the tagged result.

use crate::codec::{decode_segment, split_token};
use crate::crypto::{SignatureComparison, verify_with};
use crate::error::JwtResult;
use crate::types::Payload;
use chrono::{Duration, Utc};
use serde_json::Value;
use std::{fmt, sync::Arc};

/// Source of the current Unix time in seconds
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current Unix time in seconds
    fn now_seconds(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_seconds(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Clock frozen at a given Unix second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_seconds(&self) -> i64 {
        self.0
    }
}

/// JWT validation options.
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    /// Extra seconds a token stays valid after its `exp`.
    pub leeway: Duration,
    /// Validate expiry.
    pub validate_exp: bool,
    /// Signature comparison mode.
    pub comparison: SignatureComparison,
    /// Time source for expiry checks.
    pub clock: Arc<dyn Clock>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            leeway: Duration::zero(),
            validate_exp: true,
            comparison: SignatureComparison::ConstantTime,
            clock: Arc::new(SystemClock),
        }
    }
}

impl ValidationOptions {
    /// Ordinary (non constant-time) signature comparison, otherwise default.
    #[must_use]
    pub fn legacy() -> Self {
        Self::default().with_comparison(SignatureComparison::Literal)
    }

    /// Set the time leeway for expiry.
    #[must_use]
    pub fn with_leeway(mut self, leeway: Duration) -> Self {
        self.leeway = leeway;
        self
    }

    /// Set whether to validate expiration.
    #[must_use]
    pub fn validate_expiration(mut self, validate: bool) -> Self {
        self.validate_exp = validate;
        self
    }

    /// Set the signature comparison mode.
    #[must_use]
    pub fn with_comparison(mut self, comparison: SignatureComparison) -> Self {
        self.comparison = comparison;
        self
    }

    /// Set the time source.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }
}

/// Outcome of validating a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenStatus {
    /// Signature matches and the token has not expired
    Valid,
    /// Not three non-empty segments, or a signed payload that is not JSON
    Malformed,
    /// Signature does not match the header and payload under this key
    BadSignature,
    /// Signature matches but `exp` has passed
    Expired,
}

impl TokenStatus {
    /// Collapse to the boolean contract of [`crate::is_valid_token`]
    #[must_use]
    pub fn is_valid(self) -> bool {
        self == TokenStatus::Valid
    }
}

impl fmt::Display for TokenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenStatus::Valid => write!(f, "valid"),
            TokenStatus::Malformed => write!(f, "malformed"),
            TokenStatus::BadSignature => write!(f, "bad signature"),
            TokenStatus::Expired => write!(f, "expired"),
        }
    }
}

/// Whether `payload` has expired at `now_seconds`.
///
/// `false` when `exp` is absent or falsy (`0`, `""`, `false`, `null`).
/// Otherwise `exp` is read as a number and the token has expired when
/// `now_seconds > exp`: the `exp` second itself is still valid. Numeric
/// strings, `true` (1) and single-element arrays are read as numbers; values
/// with no numeric reading never expire.
#[must_use]
pub fn is_expired(payload: &Payload, now_seconds: i64) -> bool {
    expired_with_leeway(payload, now_seconds, 0)
}

fn expired_with_leeway(payload: &Payload, now_seconds: i64, leeway_seconds: i64) -> bool {
    match exp_deadline(payload) {
        Some(Deadline::Seconds(exp)) => now_seconds > exp.saturating_add(leeway_seconds),
        Some(Deadline::Fractional(exp)) => now_seconds as f64 > exp + leeway_seconds as f64,
        None => false,
    }
}

/// Expiry deadline read from an `exp` claim
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Deadline {
    Seconds(i64),
    Fractional(f64),
}

impl Deadline {
    /// Last Unix second at which the token is still valid
    pub(crate) fn last_valid_second(self) -> i64 {
        match self {
            Deadline::Seconds(exp) => exp,
            // saturating cast
            Deadline::Fractional(exp) => exp.floor() as i64,
        }
    }
}

/// The deadline `payload` expires after, or `None` if it never expires.
pub(crate) fn exp_deadline(payload: &Payload) -> Option<Deadline> {
    let exp = payload.get("exp")?;
    if is_falsy(exp) {
        return None;
    }
    numeric_value(exp)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Numeric reading of a claim value; `None` when it has none
fn numeric_value(value: &Value) -> Option<Deadline> {
    match value {
        Value::Null => Some(Deadline::Seconds(0)),
        Value::Bool(b) => Some(Deadline::Seconds(i64::from(*b))),
        Value::Number(n) => match n.as_i64() {
            Some(seconds) => Some(Deadline::Seconds(seconds)),
            // u64 beyond i64::MAX or a float
            None => n.as_f64().map(Deadline::Fractional),
        },
        Value::String(s) => numeric_string(s),
        Value::Array(items) => match items.as_slice() {
            [] => Some(Deadline::Seconds(0)),
            [item] => numeric_element(item),
            _ => None,
        },
        Value::Object(_) => None,
    }
}

/// Numeric reading of an array's only element, which is read through its text form
fn numeric_element(item: &Value) -> Option<Deadline> {
    match item {
        Value::Bool(_) | Value::Object(_) => None,
        other => numeric_value(other),
    }
}

fn numeric_string(s: &str) -> Option<Deadline> {
    let s = s.trim();
    match s {
        "" => return Some(Deadline::Seconds(0)),
        "Infinity" | "+Infinity" => return Some(Deadline::Fractional(f64::INFINITY)),
        "-Infinity" => return Some(Deadline::Fractional(f64::NEG_INFINITY)),
        _ => {}
    }
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    s.parse::<f64>().ok().map(Deadline::Fractional)
}

/// Validate with default options, returning why a token was rejected.
///
/// # Errors
/// Returns [`crate::JwtError::CryptoProvider`] if the HMAC primitive fails.
pub fn check_token(token: &str, key: &[u8]) -> JwtResult<TokenStatus> {
    validate_with(token, key, &ValidationOptions::default())
}

/// Validate a token: structure, then signature, then expiry.
///
/// The header's `alg` is never read; the signature is always HS256.
///
/// # Errors
/// Returns [`crate::JwtError::CryptoProvider`] if the HMAC primitive fails.
pub fn validate_with(
    token: &str,
    key: &[u8],
    options: &ValidationOptions,
) -> JwtResult<TokenStatus> {
    let Some(parts) = split_token(token) else {
        tracing::debug!("token rejected: not three non-empty segments");
        return Ok(TokenStatus::Malformed);
    };

    let verified = verify_with(&parts.signing_input(), key, parts.signature, options.comparison)
        .map_err(|e| e.logged("HS256 verification failed"))?;
    if !verified {
        tracing::debug!("token rejected: signature mismatch");
        return Ok(TokenStatus::BadSignature);
    }

    let payload = match decode_segment(parts.payload) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::debug!(error = %e, "token rejected: payload does not decode");
            return Ok(TokenStatus::Malformed);
        }
    };

    if options.validate_exp {
        if let Value::Object(claims) = &payload {
            let now = options.clock.now_seconds();
            if expired_with_leeway(claims, now, options.leeway.num_seconds()) {
                tracing::debug!(now, "token rejected: expired");
                return Ok(TokenStatus::Expired);
            }
        }
    }

    Ok(TokenStatus::Valid)
}
