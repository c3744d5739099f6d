// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Bearer token issuance and verification (HS256).

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::claims::{AuthenticatedUser, Claims};
use super::error::AuthError;

/// Clock skew tolerance (60 seconds).
const CLOCK_SKEW_LEEWAY: u64 = 60;

/// Issues and verifies the service's own bearer tokens.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Build from the configured signing secret and token lifetime.
    pub fn new(secret: &[u8], ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl: Duration::seconds(ttl_secs),
        }
    }

    /// Issue a signed token for `user_id`.
    pub fn issue(&self, user_id: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::TokenCreation(e.to_string()))
    }

    /// Verify a token's signature and expiry and extract the caller.
    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = CLOCK_SKEW_LEEWAY;

        let token_data =
            decode::<Claims>(token, &self.decoding, &validation).map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                jsonwebtoken::errors::ErrorKind::ImmatureSignature => AuthError::TokenNotYetValid,
                _ => AuthError::MalformedToken,
            })?;

        Ok(AuthenticatedUser::from_claims(token_data.claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret";

    #[test]
    fn issue_then_verify_roundtrips() {
        let tokens = TokenService::new(SECRET, 3600);
        let token = tokens.issue("user_123").unwrap();

        let user = tokens.verify(&token).unwrap();
        assert_eq!(user.user_id, "user_123");
        assert!(user.expires_at > Utc::now().timestamp());
    }

    #[test]
    fn garbage_token_is_malformed() {
        let tokens = TokenService::new(SECRET, 3600);
        let err = tokens.verify("not-a-jwt").unwrap_err();
        assert!(matches!(err, AuthError::MalformedToken));
    }

    #[test]
    fn wrong_secret_fails_signature_check() {
        let issuer = TokenService::new(b"other-secret", 3600);
        let verifier = TokenService::new(SECRET, 3600);

        let token = issuer.issue("user_123").unwrap();
        let err = verifier.verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidSignature));
    }

    #[test]
    fn expired_token_is_rejected() {
        let tokens = TokenService::new(SECRET, 3600);

        // Craft a token whose exp is well past the leeway window.
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "user_123".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let stale = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        let err = tokens.verify(&stale).unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }
}
