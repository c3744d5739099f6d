// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JWT claims and authenticated user representation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims carried by the tokens this service issues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the canonical user id.
    pub sub: String,
    /// Issued at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

/// Authenticated caller identity extracted from a verified token.
///
/// This is the type handlers receive; the wallet id equals the user id,
/// so ownership checks compare `user_id` against path parameters.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Canonical user id (the JWT `sub` claim).
    pub user_id: String,

    /// Token expiration (Unix timestamp, not serialized).
    #[serde(skip)]
    pub expires_at: i64,
}

impl AuthenticatedUser {
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            expires_at: claims.exp,
        }
    }
}
