use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{AuthError, Identity};

/// Session lifetime for every issued token.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// JWT claims carried by a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Username
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    /// Unique per issuance, so a fresh login never hands back a previous token.
    pub jti: Uuid,
}

/// Issues and verifies HS256 session tokens against a shared server secret.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl: Duration::hours(TOKEN_TTL_HOURS),
        }
    }

    pub fn issue(&self, username: &str) -> Result<String, AuthError> {
        self.issue_at(username, Utc::now())
    }

    fn issue_at(&self, username: &str, issued_at: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = Claims {
            sub: username.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
            jti: Uuid::new_v4(),
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?)
    }

    /// Accepts a token iff its signature verifies and the current time is before `exp`.
    pub fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AuthError::Unauthorized("Token has expired".to_string())
                }
                _ => AuthError::Unauthorized("Invalid token".to_string()),
            }
        })?;

        if data.claims.exp <= Utc::now().timestamp() {
            return Err(AuthError::Unauthorized("Token has expired".to_string()));
        }

        Ok(Identity {
            username: data.claims.sub,
        })
    }
}
