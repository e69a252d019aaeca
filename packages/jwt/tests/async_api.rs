//! Async builder API tests

use chrono::Duration;
use jwt_hs256::{ClaimsBuilder, FixedClock, Jwt, TokenStatus, ValidationOptions, is_valid_token};
use serde_json::json;

const KEY: &str = "qwertyuiopasdfghjklzxcvbnm123456";

#[tokio::test]
async fn test_sign_matches_sync_path() {
    let jwt = Jwt::hs256().with_secret(KEY);
    let token = jwt
        .sign(json!({"sub": "1234567890", "name": "John Doe", "iat": 1516239022}))
        .await
        .expect("sign");

    assert_eq!(
        token,
        "eyJ0eXAiOiJKV1QiLCJhbGciOiJIUzI1NiJ9.\
         eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
         qm9F4njElMyEvCFcXqH5MwGowpoDjRt91mIWyOUr-7s"
    );
    assert!(is_valid_token(&token, KEY.as_bytes()).expect("validate"));
}

#[tokio::test]
async fn test_sign_then_verify() {
    let jwt = Jwt::hs256().with_secret(KEY);
    let claims = ClaimsBuilder::new()
        .subject("user123")
        .issued_now()
        .expires_in(Duration::hours(1))
        .build();

    let token = jwt.sign(claims).await.expect("sign");

    assert!(jwt.is_valid(&token).await.expect("validate"));
    assert_eq!(jwt.check(&token).await.expect("check"), TokenStatus::Valid);
}

#[tokio::test]
async fn test_wrong_secret_is_bad_signature() {
    let issuer = Jwt::hs256().with_secret(KEY);
    let verifier = Jwt::hs256().with_secret(b"a-completely-different-secret-32");

    let token = issuer.sign(json!({"sub": "user123"})).await.expect("sign");

    assert!(!verifier.is_valid(&token).await.expect("validate"));
    assert_eq!(
        verifier.check(&token).await.expect("check"),
        TokenStatus::BadSignature
    );
}

#[tokio::test]
async fn test_options_apply_to_checks() {
    let jwt = Jwt::hs256()
        .with_secret(KEY)
        .with_options(ValidationOptions::default().with_clock(FixedClock(5000)));

    let fresh = jwt.sign(json!({"exp": 5000})).await.expect("sign");
    let stale = jwt.sign(json!({"exp": 4999})).await.expect("sign");

    assert_eq!(jwt.check(&fresh).await.expect("check"), TokenStatus::Valid);
    assert_eq!(jwt.check(&stale).await.expect("check"), TokenStatus::Expired);
    assert_eq!(jwt.check("garbage").await.expect("check"), TokenStatus::Malformed);
}

#[tokio::test]
async fn test_concurrent_operations_are_independent() {
    let jwt = Jwt::hs256().with_secret(KEY);

    let tokens = sign_many(&jwt, 16).await;
    for (i, token) in tokens.iter().enumerate() {
        assert!(jwt.is_valid(token).await.expect("validate"));
        assert_eq!(jwt_hs256::get_payload(token)["n"], json!(i));
    }
}

async fn sign_many(jwt: &jwt_hs256::Hs256Jwt, count: usize) -> Vec<String> {
    let pending: Vec<_> = (0..count).map(|n| jwt.sign(json!({"n": n}))).collect();
    let mut tokens = Vec::with_capacity(count);
    for signing in pending {
        tokens.push(signing.await.expect("sign"));
    }
    tokens
}

#[tokio::test]
async fn test_unserializable_claims_surface_encoding_error() {
    let mut claims = std::collections::BTreeMap::new();
    claims.insert(vec![1u8], "value");

    let result = Jwt::hs256().with_secret(KEY).sign(claims).await;
    assert!(matches!(result, Err(jwt_hs256::JwtError::Encoding(_))));
}
