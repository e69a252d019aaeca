//! HMAC-SHA256 operations for JWT signing and verification

use crate::codec::base64_url_encode;
use crate::error::{JwtError, JwtResult};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// How a recomputed signature is compared with the one carried by a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureComparison {
    /// Constant-time byte comparison
    #[default]
    ConstantTime,
    /// Ordinary string equality, the historical behavior of HS256 issuers
    /// this crate interoperates with
    Literal,
}

/// Raw HMAC-SHA256 digest of `data` under `secret`
pub(crate) fn hmac_sha256(data: &[u8], secret: &[u8]) -> JwtResult<[u8; 32]> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|e| JwtError::crypto_provider(&format!("HMAC-SHA256 rejected key: {e}")))?;
    mac.update(data);
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&mac.finalize().into_bytes());
    Ok(digest)
}

/// Sign `signing_input` and return the Base64URL (unpadded) digest.
///
/// Deterministic: the same input and key always give the same signature.
/// Zero-length keys are accepted.
///
/// # Errors
/// Returns [`JwtError::CryptoProvider`] if the HMAC primitive rejects the key.
pub fn sign(signing_input: &str, key: &[u8]) -> JwtResult<String> {
    let digest = hmac_sha256(signing_input.as_bytes(), key)?;
    Ok(base64_url_encode(&digest))
}

/// Recompute the signature over `signing_input` and compare it to `candidate`
/// in constant time.
///
/// # Errors
/// Returns [`JwtError::CryptoProvider`] if the HMAC primitive rejects the key.
pub fn verify(signing_input: &str, key: &[u8], candidate: &str) -> JwtResult<bool> {
    verify_with(signing_input, key, candidate, SignatureComparison::ConstantTime)
}

/// [`verify`] with an explicit comparison mode
///
/// # Errors
/// Returns [`JwtError::CryptoProvider`] if the HMAC primitive rejects the key.
pub fn verify_with(
    signing_input: &str,
    key: &[u8],
    candidate: &str,
    comparison: SignatureComparison,
) -> JwtResult<bool> {
    let expected = sign(signing_input, key)?;
    Ok(match comparison {
        SignatureComparison::ConstantTime => {
            bool::from(expected.as_bytes().ct_eq(candidate.as_bytes()))
        }
        SignatureComparison::Literal => expected == candidate,
    })
}
