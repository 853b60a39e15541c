//! HS256 bearer tokens.
//!
//! Accounts live with whichever service issues tokens. This one checks them;
//! [`JwtConfig::issue`] exists for local tooling and tests.

use chrono::Utc;
use inventory_core::types::DbId;
use jsonwebtoken::errors::Error as JwtError;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DEFAULT_TTL_MINS: i64 = 15;

/// Token payload. `sub` is the caller's user id.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: DbId,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

impl Claims {
    /// Claims for `user_id` expiring `ttl_mins` from now.
    pub fn new(user_id: DbId, ttl_mins: i64) -> Self {
        let iat = Utc::now().timestamp();
        Self {
            sub: user_id,
            exp: iat + ttl_mins * 60,
            iat,
            jti: Uuid::new_v4().to_string(),
        }
    }
}

/// Signing secret and lifetime of tokens minted by [`JwtConfig::issue`].
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub token_ttl_mins: i64,
}

impl JwtConfig {
    /// Reads `JWT_SECRET` (required, non-empty) and `JWT_ACCESS_EXPIRY_MINS`
    /// (default 15). Panics on a missing secret or a non-numeric lifetime.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_default();
        assert!(!secret.is_empty(), "JWT_SECRET must be set and non-empty");

        let token_ttl_mins = match std::env::var("JWT_ACCESS_EXPIRY_MINS") {
            Ok(raw) => raw
                .parse()
                .unwrap_or_else(|_| panic!("JWT_ACCESS_EXPIRY_MINS is not an integer: {raw}")),
            Err(_) => DEFAULT_TTL_MINS,
        };

        Self {
            secret,
            token_ttl_mins,
        }
    }

    /// Mint a token for `user_id` with the configured lifetime.
    pub fn issue(&self, user_id: DbId) -> Result<String, JwtError> {
        self.sign(&Claims::new(user_id, self.token_ttl_mins))
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, JwtError> {
        jsonwebtoken::encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    /// Check signature and expiry, returning the payload.
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            token_ttl_mins: 15,
        }
    }

    #[test]
    fn issued_token_carries_subject_and_lifetime() {
        let jwt = config("unit-secret");
        let claims = jwt.verify(&jwt.issue(42).unwrap()).unwrap();

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.exp - claims.iat, 15 * 60);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn expired_claims_are_rejected() {
        let jwt = config("unit-secret");
        // Past the 60s leeway jsonwebtoken allows by default.
        let token = jwt.sign(&Claims::new(1, -5)).unwrap();

        assert!(jwt.verify(&token).is_err());
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let token = config("secret-one").issue(1).unwrap();
        assert!(config("secret-two").verify(&token).is_err());
    }

    #[test]
    fn malformed_token_is_rejected() {
        assert!(config("unit-secret").verify("not-a-jwt").is_err());
    }
}
