//! HS256 token issuing and verification.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use stockdesk_core::User;

use crate::claims::{JwtClaims, TokenValidationError, validate_claims};

/// Default lifetime of an issued token.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60;

#[derive(Debug, Error)]
pub enum TokenError {
    /// Malformed token, wrong algorithm or bad signature.
    #[error("invalid token: {0}")]
    Invalid(String),

    /// Signature is fine but the time window is not.
    #[error(transparent)]
    Claims(#[from] TokenValidationError),

    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// A freshly signed bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Produces signed bearer tokens for authenticated users.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &User, now: DateTime<Utc>) -> Result<IssuedToken, TokenError>;
}

/// Verifies bearer tokens and returns their claims.
pub trait JwtValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, TokenError>;
}

/// Shared-secret (HS256) issuer and validator.
#[derive(Clone)]
pub struct Hs256Jwt {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl core::fmt::Debug for Hs256Jwt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hs256Jwt").field("ttl", &self.ttl).finish_non_exhaustive()
    }
}

impl Hs256Jwt {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self::with_ttl(secret, Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES))
    }

    pub fn with_ttl(secret: impl AsRef<[u8]>, ttl: Duration) -> Self {
        let secret = secret.as_ref();
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn validation() -> Validation {
        // Time checks run in `validate_claims` against the caller's clock.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);
        validation
    }
}

impl TokenIssuer for Hs256Jwt {
    fn issue(&self, user: &User, now: DateTime<Utc>) -> Result<IssuedToken, TokenError> {
        let expires_at = now + self.ttl;
        let claims = JwtClaims::new(user.id, user.email.clone(), now, expires_at);
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))?;
        tracing::debug!(user_id = %user.id, %expires_at, "issued token");
        Ok(IssuedToken { token, expires_at })
    }
}

impl JwtValidator for Hs256Jwt {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, TokenError> {
        let data = decode::<JwtClaims>(token, &self.decoding, &Self::validation())
            .map_err(|e| TokenError::Invalid(e.to_string()))?;
        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockdesk_core::UserId;

    fn user() -> User {
        User {
            id: UserId::new(3),
            email: "admin@example.com".into(),
            password_hash: String::new(),
        }
    }

    #[test]
    fn issued_token_validates_and_carries_identity() {
        let jwt = Hs256Jwt::new("test-secret");
        let now = Utc::now();
        let issued = jwt.issue(&user(), now).unwrap();
        assert_eq!(issued.expires_at, now + Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES));

        let claims = jwt.validate(&issued.token, now).unwrap();
        assert_eq!(claims.sub, UserId::new(3));
        assert_eq!(claims.email, "admin@example.com");
    }

    #[test]
    fn expired_token_is_rejected() {
        let jwt = Hs256Jwt::with_ttl("test-secret", Duration::minutes(1));
        let now = Utc::now();
        let issued = jwt.issue(&user(), now).unwrap();

        let err = jwt.validate(&issued.token, now + Duration::minutes(2)).unwrap_err();
        assert!(matches!(err, TokenError::Claims(TokenValidationError::Expired)));
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let now = Utc::now();
        let issued = Hs256Jwt::new("secret-a").issue(&user(), now).unwrap();
        let err = Hs256Jwt::new("secret-b").validate(&issued.token, now).unwrap_err();
        assert!(matches!(err, TokenError::Invalid(_)));
    }

    #[test]
    fn garbage_is_rejected() {
        let err = Hs256Jwt::new("s").validate("not-a-jwt", Utc::now()).unwrap_err();
        assert!(matches!(err, TokenError::Invalid(_)));
    }
}
