//! Issue, inspect and validate an HS256 token

use chrono::Duration;
use jwt_hs256::{ClaimsBuilder, ClaimsExtractor, Jwt, get_payload, is_expired_token};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let jwt = Jwt::hs256().with_secret("qwertyuiopasdfghjklzxcvbnm123456");

    let claims = ClaimsBuilder::new()
        .issuer("Deno Land")
        .issued_now()
        .expires_in(Duration::hours(1))
        .audience("deno.com")
        .build();

    let token = jwt.sign(claims).await?;
    println!("token:   {token}");
    println!("status:  {}", jwt.check(&token).await?);
    println!("expired: {}", is_expired_token(&token));

    let payload = get_payload(&token);
    println!("issuer:  {:?}", ClaimsExtractor::issuer(&payload));
    println!("expires: {:?}", ClaimsExtractor::expires_at(&payload));

    Ok(())
}
