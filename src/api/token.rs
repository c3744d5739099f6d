// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token issuance endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::ApiError, state::AppState};

/// Request to generate a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateTokenRequest {
    /// User id the token is issued for.
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
}

/// Response carrying a freshly issued bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Signed JWT to present as `Authorization: Bearer <token>`.
    pub token: String,
}

/// Issue a bearer token for a user id.
///
/// The endpoint is unauthenticated: possession of a user id is enough to
/// obtain a token for it, mirroring the demo-grade trust model of the
/// original service.
#[utoipa::path(
    post,
    path = "/generate-token",
    tag = "Auth",
    request_body = GenerateTokenRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Missing user id"),
        (status = 500, description = "Token issuance failed")
    )
)]
pub async fn generate_token(
    State(state): State<AppState>,
    Json(request): Json<GenerateTokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user_id = request.user_id.as_deref().map(str::trim).unwrap_or("");
    if user_id.is_empty() {
        return Err(ApiError::bad_request("User ID is required."));
    }

    let token = state.tokens.issue(user_id).map_err(|e| {
        tracing::error!(error = %e, "token issuance failed");
        ApiError::internal("Failed to generate token.")
    })?;

    Ok(Json(TokenResponse { token }))
}
