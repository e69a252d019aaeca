//! HS256 JWT builder

use super::result::AsyncJwtResult;
use crate::key::SecretKey;
use crate::token::create_token;
use crate::validation::{TokenStatus, ValidationOptions, validate_with};
use serde::Serialize;
use tokio::sync::oneshot;

/// Direct builder entry point
pub struct Jwt;

impl Jwt {
    /// Start an HS256 builder
    #[must_use]
    pub fn hs256() -> Hs256Builder {
        Hs256Builder
    }
}

/// HS256 JWT builder - initial state
#[derive(Debug, Default)]
pub struct Hs256Builder;

impl Hs256Builder {
    /// Set the shared secret
    #[must_use]
    pub fn with_secret(self, secret: impl Into<SecretKey>) -> Hs256Jwt {
        Hs256Jwt {
            secret: secret.into(),
            options: ValidationOptions::default(),
        }
    }
}

/// HS256 signer/verifier bound to one shared secret
///
/// Each action spawns onto the current Tokio runtime and must therefore be
/// called from within one.
#[derive(Debug, Clone)]
pub struct Hs256Jwt {
    secret: SecretKey,
    options: ValidationOptions,
}

impl Hs256Jwt {
    /// Set validation options used by [`Hs256Jwt::check`] and [`Hs256Jwt::is_valid`]
    #[must_use]
    pub fn with_options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    /// Validation options in effect
    #[must_use]
    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Sign claims into a token
    pub fn sign<C: Serialize + Send + 'static>(&self, claims: C) -> AsyncJwtResult<String> {
        let secret = self.secret.clone();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let result = create_token(&claims, secret.as_bytes());
            let _ = tx.send(result);
        });

        AsyncJwtResult::new(rx)
    }

    /// Validate a token and report why it was rejected
    pub fn check<S: AsRef<str>>(&self, token: S) -> AsyncJwtResult<TokenStatus> {
        let token = token.as_ref().to_string();
        let secret = self.secret.clone();
        let options = self.options.clone();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let result = validate_with(&token, secret.as_bytes(), &options);
            let _ = tx.send(result);
        });

        AsyncJwtResult::new(rx)
    }

    /// Validate a token, boolean result only
    pub fn is_valid<S: AsRef<str>>(&self, token: S) -> AsyncJwtResult<bool> {
        let token = token.as_ref().to_string();
        let secret = self.secret.clone();
        let options = self.options.clone();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let result =
                validate_with(&token, secret.as_bytes(), &options).map(TokenStatus::is_valid);
            let _ = tx.send(result);
        });

        AsyncJwtResult::new(rx)
    }
}
