//! Async builder API
//!
//! ```no_run
//! # async fn demo() -> jwt_hs256::JwtResult<()> {
//! use jwt_hs256::{ClaimsBuilder, Jwt};
//!
//! let jwt = Jwt::hs256().with_secret("qwertyuiopasdfghjklzxcvbnm123456");
//! let token = jwt.sign(ClaimsBuilder::new().subject("user123").build()).await?;
//! assert!(jwt.is_valid(&token).await?);
//! # Ok(())
//! # }
//! ```

mod builder;
mod result;

pub use builder::{Hs256Builder, Hs256Jwt, Jwt};
pub use result::AsyncJwtResult;
