//! Compact serialization codec
//!
//! Canonical JSON + Base64URL encoding of header and payload segments, and the
//! structural split/join of the `HEADER.PAYLOAD.SIGNATURE` token string.
//! Nothing here touches keys or signatures beyond treating them as text.

use crate::error::{JwtError, JwtResult};
use crate::types::TokenParts;
use base64::{
    Engine as _, alphabet,
    engine::{
        DecodePaddingMode,
        general_purpose::{GeneralPurpose, GeneralPurposeConfig},
    },
};
use serde::Serialize;
use serde_json::Value;

/// Base64URL (RFC 4648 §5). Encodes without padding, decodes with or without it.
const BASE64_URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Base64URL encoding without padding
#[inline]
pub(crate) fn base64_url_encode(input: &[u8]) -> String {
    BASE64_URL.encode(input)
}

/// Base64URL decoding, padding optional
#[inline]
pub(crate) fn base64_url_decode(input: &str) -> JwtResult<Vec<u8>> {
    BASE64_URL
        .decode(input)
        .map_err(|e| JwtError::decoding(&format!("invalid base64url: {e}")))
}

/// Serialize a value to compact JSON and encode it as a Base64URL segment.
///
/// Object keys are written in the order the value yields them, so the same
/// input always produces the same segment.
///
/// # Errors
/// Returns [`JwtError::Encoding`] if the value cannot be represented as JSON.
pub fn encode_segment<T: Serialize + ?Sized>(value: &T) -> JwtResult<String> {
    let json = serde_json::to_vec(value).map_err(|e| JwtError::encoding(&e.to_string()))?;
    Ok(base64_url_encode(&json))
}

/// Decode a Base64URL segment and parse it as JSON.
///
/// # Errors
/// Returns [`JwtError::Decoding`] on malformed Base64URL, non UTF-8 bytes or
/// invalid JSON.
pub fn decode_segment(text: &str) -> JwtResult<Value> {
    let bytes = base64_url_decode(text)?;
    let json = String::from_utf8(bytes)
        .map_err(|e| JwtError::decoding(&format!("segment is not UTF-8: {e}")))?;
    serde_json::from_str(&json)
        .map_err(|e| JwtError::decoding(&format!("segment is not JSON: {e}")))
}

/// Split a token into its three segments.
///
/// Returns `None` unless there are exactly three parts and none is empty.
/// Segments are not decoded.
#[must_use]
pub fn split_token(token: &str) -> Option<TokenParts<'_>> {
    let mut parts = token.split('.');
    let header = parts.next()?;
    let payload = parts.next()?;
    let signature = parts.next()?;

    if parts.next().is_some() || header.is_empty() || payload.is_empty() || signature.is_empty()
    {
        return None;
    }

    Some(TokenParts {
        header,
        payload,
        signature,
    })
}

/// Join three segments with `.` separators
#[must_use]
pub fn join_token(header: &str, payload: &str, signature: &str) -> String {
    format!("{header}.{payload}.{signature}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::JwtHeader;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn encodes_fixed_header() {
        let segment = encode_segment(&JwtHeader::hs256()).expect("header encodes");
        assert_eq!(segment, "eyJ0eXAiOiJKV1QiLCJhbGciOiJIUzI1NiJ9");
    }

    #[test]
    fn round_trip_keeps_key_order() {
        let value = json!({"zeta": 1, "alpha": [true, null, "x"], "mid": {"b": 2.5, "a": -3}});
        let decoded = decode_segment(&encode_segment(&value).expect("encodes")).expect("decodes");

        assert_eq!(decoded, value);
        assert_eq!(
            decoded.to_string(),
            r#"{"zeta":1,"alpha":[true,null,"x"],"mid":{"b":2.5,"a":-3}}"#
        );
    }

    #[test]
    fn encoded_segments_are_url_safe_and_unpadded() {
        // standard Base64 of this payload is "eyJrIjoiPz8/Pj4+In0="
        let segment = encode_segment(&json!({"k": "???>>>"})).expect("encodes");
        assert_eq!(segment, "eyJrIjoiPz8_Pj4-In0");
    }

    #[test]
    fn non_string_map_keys_fail_to_encode() {
        let mut map = BTreeMap::new();
        map.insert((1u8, 2u8), 3u8);
        assert!(matches!(encode_segment(&map), Err(JwtError::Encoding(_))));
    }

    #[test]
    fn decode_accepts_optional_padding() {
        assert_eq!(decode_segment("e30").expect("unpadded"), json!({}));
        assert_eq!(decode_segment("e30=").expect("padded"), json!({}));
    }

    #[test]
    fn decode_rejects_bad_input() {
        // not base64url
        assert!(matches!(decode_segment("!!!"), Err(JwtError::Decoding(_))));
        // standard alphabet characters are not accepted
        assert!(matches!(decode_segment("e3+/"), Err(JwtError::Decoding(_))));
        // "not json"
        assert!(matches!(decode_segment("bm90IGpzb24"), Err(JwtError::Decoding(_))));
        // 0xff 0xfe is not UTF-8
        assert!(matches!(decode_segment("__4"), Err(JwtError::Decoding(_))));
    }

    #[test]
    fn split_requires_three_non_empty_parts() {
        let parts = split_token("aaa.bbb.ccc").expect("well formed");
        assert_eq!(parts.header, "aaa");
        assert_eq!(parts.payload, "bbb");
        assert_eq!(parts.signature, "ccc");

        for token in ["", "garbage", "a.b", "a.b.c.d", ".b.c", "a..c", "a.b.", "..", "..."] {
            assert!(split_token(token).is_none(), "{token:?} should not split");
        }
    }

    #[test]
    fn join_is_inverse_of_split() {
        let token = join_token("aaa", "bbb", "ccc");
        assert_eq!(token, "aaa.bbb.ccc");

        let parts = split_token(&token).expect("well formed");
        assert_eq!(join_token(parts.header, parts.payload, parts.signature), token);
    }
}
