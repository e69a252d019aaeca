//! HS256 JSON Web Tokens
//!
//! Issues, signs and verifies JWS compact tokens (`HEADER.PAYLOAD.SIGNATURE`)
//! signed with HMAC-SHA256:
//! - [`codec`]: canonical JSON + Base64URL segments, token split/join
//! - [`crypto`]: HMAC-SHA256 signing, constant-time verification
//! - [`validation`]: expiry, validation options, [`TokenStatus`]
//! - [`api`]: async builder that runs operations on the Tokio runtime
//!
//! The algorithm is fixed. The header's `alg` is written but never read back,
//! so a token cannot talk the verifier into a different algorithm.
//!
//! ```
//! use jwt_hs256::{create_token, get_payload, is_valid_token};
//! use serde_json::json;
//!
//! let key = b"qwertyuiopasdfghjklzxcvbnm123456";
//! let token = create_token(&json!({"sub": "1234567890", "name": "John Doe"}), key)?;
//!
//! assert!(is_valid_token(&token, key)?);
//! assert_eq!(get_payload(&token)["name"], "John Doe");
//! # Ok::<(), jwt_hs256::JwtError>(())
//! ```

pub mod api;
pub mod claims;
pub mod codec;
pub mod crypto;
mod error;
mod key;
mod token;
mod types;
pub mod validation;

pub use api::{AsyncJwtResult, Hs256Builder, Hs256Jwt, Jwt};
pub use claims::{ClaimsBuilder, ClaimsExtractor};
pub use crypto::SignatureComparison;
pub use error::*;
pub use key::{RECOMMENDED_KEY_SIZE, SecretKey};
pub use token::{create_token, get_payload, is_expired_token, is_expired_token_at, is_valid_token};
pub use types::*;
pub use validation::{
    Clock, FixedClock, SystemClock, TokenStatus, ValidationOptions, check_token, is_expired,
    validate_with,
};
