//! JWT cryptographic operations

pub mod hmac_sha256;

pub use hmac_sha256::{SignatureComparison, sign, verify, verify_with};
