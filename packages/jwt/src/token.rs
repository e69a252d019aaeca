//! Top-level token operations
//!
//! Thin orchestration over [`crate::codec`], [`crate::crypto`] and
//! [`crate::validation`]. Untrusted token strings never produce an error here:
//! parse failures become `false`, an empty payload, or "not expired".

use crate::codec::{decode_segment, encode_segment, join_token, split_token};
use crate::crypto::sign;
use crate::error::JwtResult;
use crate::key::warn_if_short;
use crate::types::{JwtHeader, Payload};
use crate::validation::{Clock, SystemClock, check_token, is_expired};
use serde::Serialize;
use serde_json::Value;

/// Create a signed HS256 token for `payload`.
///
/// The payload is serialized in the order its fields are yielded, so the same
/// input and key always give the same token. Zero-length and short keys are
/// accepted but logged as a warning.
///
/// # Errors
/// Returns [`crate::JwtError::Encoding`] if the payload is not representable
/// as JSON, or [`crate::JwtError::CryptoProvider`] if signing fails.
pub fn create_token<T: Serialize + ?Sized>(payload: &T, key: &[u8]) -> JwtResult<String> {
    warn_if_short(key);

    let header = encode_segment(&JwtHeader::hs256())?;
    let payload = encode_segment(payload)?;
    let signature = sign(&format!("{header}.{payload}"), key)
        .map_err(|e| e.logged("HS256 signing failed"))?;

    tracing::debug!(payload_len = payload.len(), "created HS256 token");
    Ok(join_token(&header, &payload, &signature))
}

/// Whether `token` carries a valid signature under `key` and has not expired.
///
/// Does not say why a token was rejected; use [`check_token`] for that.
///
/// # Errors
/// Returns [`crate::JwtError::CryptoProvider`] if the HMAC primitive fails.
pub fn is_valid_token(token: &str, key: &[u8]) -> JwtResult<bool> {
    check_token(token, key).map(crate::validation::TokenStatus::is_valid)
}

/// Decode the payload without checking the signature.
///
/// Returns an empty map if the token is structurally malformed, the payload
/// segment does not decode, or it is not a JSON object. The result is
/// untrusted unless [`is_valid_token`] also holds.
#[must_use]
pub fn get_payload(token: &str) -> Payload {
    let Some(parts) = split_token(token) else {
        return Payload::new();
    };

    match decode_segment(parts.payload) {
        Ok(Value::Object(payload)) => payload,
        Ok(_) => Payload::new(),
        Err(e) => {
            tracing::debug!(error = %e, "payload segment does not decode");
            Payload::new()
        }
    }
}

/// Whether the token's `exp` has passed on the wall clock.
///
/// Malformed tokens and tokens without `exp` are not expired.
#[must_use]
pub fn is_expired_token(token: &str) -> bool {
    is_expired_token_at(token, &SystemClock)
}

/// [`is_expired_token`] against an explicit clock
#[must_use]
pub fn is_expired_token_at(token: &str, clock: &dyn Clock) -> bool {
    is_expired(&get_payload(token), clock.now_seconds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FixedClock;
    use serde_json::json;

    const KEY: &[u8] = b"qwertyuiopasdfghjklzxcvbnm123456";

    #[test]
    fn get_payload_ignores_signature() {
        let token = create_token(&json!({"sub": "abc"}), KEY).expect("create");
        let parts = split_token(&token).expect("three segments");
        let forged = join_token(parts.header, parts.payload, "forged");

        assert_eq!(get_payload(&forged), get_payload(&token));
        assert_eq!(get_payload(&token).get("sub"), Some(&json!("abc")));
    }

    #[test]
    fn get_payload_never_fails() {
        for token in ["garbage", "", "a.b", "a.!!!.c", "e30.bm90IGpzb24.c", "e30.WzFd.c"] {
            assert!(get_payload(token).is_empty(), "{token:?}");
        }
    }

    #[test]
    fn expiry_against_clock() {
        let token = create_token(&json!({"exp": 2000}), KEY).expect("create");
        assert!(!is_expired_token_at(&token, &FixedClock(2000)));
        assert!(is_expired_token_at(&token, &FixedClock(2001)));
        assert!(!is_expired_token_at("garbage", &FixedClock(i64::MAX)));
    }

    #[test]
    fn non_object_payload_is_still_signed() {
        let token = create_token(&json!([1, 2, 3]), KEY).expect("create");
        assert!(is_valid_token(&token, KEY).expect("validate"));
        assert!(get_payload(&token).is_empty());
    }
}
