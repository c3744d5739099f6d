// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for authenticated users.
//!
//! Use the `Auth` extractor in handlers to require authentication:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(user): Auth) -> impl IntoResponse {
//!     // user is AuthenticatedUser
//! }
//! ```

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use super::{AuthenticatedUser, AuthError};
use crate::state::AppState;

/// Extractor for authenticated users.
///
/// Parses the `Authorization: Bearer <token>` header and verifies the
/// token against the service's signing secret.
pub struct Auth(pub AuthenticatedUser);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthHeader)?
            .to_str()
            .map_err(|_| AuthError::InvalidAuthHeader)?;

        // Extract Bearer token
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidAuthHeader)?
            .trim();

        let user = state.tokens.verify(token)?;

        Ok(Auth(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn missing_header_is_401_missing_auth() {
        let state = AppState::default();
        let mut parts = Request::builder()
            .uri("/test")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MissingAuthHeader)));
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_rejected() {
        let state = AppState::default();
        let mut parts = Request::builder()
            .uri("/test")
            .header("Authorization", "Basic dXNlcjpwYXNz")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::InvalidAuthHeader)));
    }

    #[tokio::test]
    async fn forged_token_is_rejected() {
        let state = AppState::default();
        let mut parts = Request::builder()
            .uri("/test")
            .header("Authorization", "Bearer aaa.bbb.ccc")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MalformedToken)));
    }

    #[tokio::test]
    async fn valid_token_yields_caller_identity() {
        let state = AppState::default();
        let token = state.tokens.issue("user_123").unwrap();

        let mut parts = Request::builder()
            .uri("/test")
            .header("Authorization", format!("Bearer {token}"))
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert_eq!(result.unwrap().0.user_id, "user_123");
    }
}
