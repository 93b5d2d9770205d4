//! Stateless signed session tokens (HS256).
//!
//! Validity is entirely re-derivable from the token's signature and embedded
//! expiry; the server keeps no registry. Logout is therefore advisory: an
//! issued token stays valid until it expires.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
  Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
};
use serde::{Deserialize, Serialize};

/// Claims embedded in a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
  /// Username the token was issued to.
  pub sub: String,
  pub iat: i64,
  pub exp: i64,
}

/// A freshly-minted token plus its expiry, in epoch milliseconds, for
/// client display.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
  pub token:   String,
  pub expires: i64,
}

pub fn issue(
  username: &str,
  secret: &str,
  ttl: Duration,
) -> Result<IssuedToken, jsonwebtoken::errors::Error> {
  let now = Utc::now();
  let expires_at: DateTime<Utc> = now + ttl;
  let claims = Claims {
    sub: username.to_string(),
    iat: now.timestamp(),
    exp: expires_at.timestamp(),
  };
  let token = encode(
    &Header::new(Algorithm::HS256),
    &claims,
    &EncodingKey::from_secret(secret.as_bytes()),
  )?;
  Ok(IssuedToken { token, expires: expires_at.timestamp_millis() })
}

/// Verify signature and expiry. Malformed, mis-signed and expired tokens are
/// all equivalent to the caller; the distinction only reaches logs.
pub fn verify(
  token: &str,
  secret: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
  let mut validation = Validation::new(Algorithm::HS256);
  validation.leeway = 0;
  let data = decode::<Claims>(
    token,
    &DecodingKey::from_secret(secret.as_bytes()),
    &validation,
  )?;
  Ok(data.claims)
}

#[cfg(test)]
mod tests {
  use chrono::Duration;

  use super::{issue, verify};

  const SECRET: &str = "test-secret";

  #[test]
  fn issue_then_verify_round_trip() {
    let issued = issue("admin", SECRET, Duration::days(30)).unwrap();
    let claims = verify(&issued.token, SECRET).unwrap();
    assert_eq!(claims.sub, "admin");
    assert_eq!(claims.exp * 1000, issued.expires);
  }

  #[test]
  fn wrong_secret_is_rejected() {
    let issued = issue("admin", SECRET, Duration::days(30)).unwrap();
    assert!(verify(&issued.token, "other-secret").is_err());
  }

  #[test]
  fn expired_token_is_rejected_even_when_well_signed() {
    let issued = issue("admin", SECRET, Duration::hours(-1)).unwrap();
    assert!(verify(&issued.token, SECRET).is_err());
  }

  #[test]
  fn malformed_token_is_rejected() {
    assert!(verify("not-a-token", SECRET).is_err());
  }
}
