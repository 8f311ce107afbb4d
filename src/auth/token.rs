use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::error::AuthError;
use crate::domain::{Role, User};

/// Signing configuration, passed in at construction. Never read from
/// process-wide state.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub ttl: Duration,
}

/// Identity assertion carried inside a bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub role: Role,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// Issues and verifies signed, time-limited bearer tokens (HS256).
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
    validation: Validation,
}

impl TokenService {
    pub fn new(config: &TokenConfig) -> Self {
        let mut validation = Validation::default();
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            ttl: config.ttl,
            validation,
        }
    }

    pub fn issue(&self, user: &User) -> Result<String, AuthError> {
        let claims = Claims {
            sub: user.id.clone(),
            role: user.role,
            exp: (Utc::now() + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::TokenEncoding(e.to_string()))
    }

    /// Any decode failure (bad signature, malformed, expired) is reported
    /// uniformly as [`AuthError::Unauthenticated`].
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "user_1".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            role: Role::Patient,
            specialization: None,
            password_hash: String::new(),
        }
    }

    fn service(ttl: Duration) -> TokenService {
        TokenService::new(&TokenConfig {
            secret: "test-secret".to_string(),
            ttl,
        })
    }

    #[test]
    fn issue_and_verify_roundtrip() {
        let tokens = service(Duration::minutes(30));
        let token = tokens.issue(&sample_user()).unwrap();
        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.sub, "user_1");
        assert_eq!(claims.role, Role::Patient);
    }

    #[test]
    fn expired_token_is_rejected() {
        let tokens = service(Duration::minutes(-5));
        let token = tokens.issue(&sample_user()).unwrap();
        assert_eq!(tokens.verify(&token), Err(AuthError::Unauthenticated));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let tokens = service(Duration::minutes(30));
        let other = TokenService::new(&TokenConfig {
            secret: "other-secret".to_string(),
            ttl: Duration::minutes(30),
        });
        let token = other.issue(&sample_user()).unwrap();
        assert_eq!(tokens.verify(&token), Err(AuthError::Unauthenticated));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let tokens = service(Duration::minutes(30));
        assert_eq!(tokens.verify("not-a-token"), Err(AuthError::Unauthenticated));
    }
}
