use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// JWT claims as issued by the external auth provider.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Identity UUID. Optional so a token without a subject is
    /// distinguishable from an undecodable one.
    pub sub: Option<String>,
    /// Expiration timestamp.
    pub exp: usize,
}

/// Sign a token for a subject. Issuance normally happens in the external
/// auth provider; this exists for tooling and the test suite.
pub fn sign(subject: &str, secret: &str, ttl: Duration) -> Result<String> {
    let expiration = Utc::now()
        .checked_add_signed(ttl)
        .expect("valid timestamp")
        .timestamp();

    let claims = Claims {
        sub: Some(subject.to_owned()),
        exp: expiration as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Verify signature and expiry, returning the claims.
pub fn verify(token: &str, secret: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}
