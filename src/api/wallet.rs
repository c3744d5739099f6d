// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet endpoints: create, get, credit, debit.
//!
//! All routes require a bearer token. The wallet id equals the owning
//! user's id, so create/credit/debit verify that the caller's identity
//! matches the wallet before touching the ledger; reads stay open to any
//! authenticated caller.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::{auth::Auth, error::ApiError, models::Wallet, state::AppState};

/// Request to create a new wallet.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateWalletRequest {
    /// Id of the user the wallet belongs to.
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
}

/// Response after creating a wallet.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateWalletResponse {
    /// Message indicating success.
    pub message: String,
    /// The created wallet.
    pub wallet: Wallet,
}

/// Credit/debit request body. The amount is taken as a raw JSON value so
/// the ledger's own coercion decides what counts as a number.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AmountRequest {
    /// Amount in minor currency units.
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub amount: Option<Value>,
}

/// Response for a successful balance mutation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Message indicating success.
    pub message: String,
}

/// Create a wallet for the authenticated user.
#[utoipa::path(
    post,
    path = "/wallet",
    tag = "Wallet",
    security(("bearer_auth" = [])),
    request_body = CreateWalletRequest,
    responses(
        (status = 201, description = "Wallet created successfully", body = CreateWalletResponse),
        (status = 400, description = "Missing or invalid user id"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller does not own this user id"),
        (status = 409, description = "Wallet already exists")
    )
)]
pub async fn create_wallet(
    Auth(user): Auth,
    State(state): State<AppState>,
    Json(request): Json<CreateWalletRequest>,
) -> Result<(StatusCode, Json<CreateWalletResponse>), ApiError> {
    let requested = request.user_id.as_deref().map(str::trim).unwrap_or("");
    if !requested.is_empty() && requested != user.user_id {
        return Err(ApiError::forbidden(
            "You can only create a wallet for your own user id",
        ));
    }

    // An empty id falls through so the ledger reports the missing field.
    let wallet = state.ledger.create_wallet(requested)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateWalletResponse {
            message: "Wallet created successfully.".to_string(),
            wallet,
        }),
    ))
}

/// Get a wallet by id.
#[utoipa::path(
    get,
    path = "/wallet/{id}",
    tag = "Wallet",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Wallet id")),
    responses(
        (status = 200, description = "Wallet details", body = Wallet),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Wallet not found")
    )
)]
pub async fn get_wallet(
    Auth(_user): Auth,
    State(state): State<AppState>,
    Path(wallet_id): Path<String>,
) -> Result<Json<Wallet>, ApiError> {
    let wallet = state.ledger.get_wallet(&wallet_id)?;
    Ok(Json(wallet))
}

/// Credit an amount to a wallet.
#[utoipa::path(
    put,
    path = "/wallet/{id}/credit",
    tag = "Wallet",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Wallet id")),
    request_body = AmountRequest,
    responses(
        (status = 200, description = "Wallet credited successfully", body = MessageResponse),
        (status = 400, description = "Invalid amount"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller does not own this wallet"),
        (status = 404, description = "Wallet not found"),
        (status = 503, description = "Transient store conflict, retry")
    )
)]
pub async fn credit_wallet(
    Auth(user): Auth,
    State(state): State<AppState>,
    Path(wallet_id): Path<String>,
    Json(request): Json<AmountRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    verify_ownership(&user.user_id, &wallet_id)?;
    state.ledger.credit_wallet(&wallet_id, request.amount.as_ref())?;

    Ok(Json(MessageResponse {
        message: "Wallet credited successfully.".to_string(),
    }))
}

/// Debit an amount from a wallet.
#[utoipa::path(
    put,
    path = "/wallet/{id}/debit",
    tag = "Wallet",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Wallet id")),
    request_body = AmountRequest,
    responses(
        (status = 200, description = "Wallet debited successfully", body = MessageResponse),
        (status = 400, description = "Invalid amount or insufficient funds"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller does not own this wallet"),
        (status = 404, description = "Wallet not found"),
        (status = 503, description = "Transient store conflict, retry")
    )
)]
pub async fn debit_wallet(
    Auth(user): Auth,
    State(state): State<AppState>,
    Path(wallet_id): Path<String>,
    Json(request): Json<AmountRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    verify_ownership(&user.user_id, &wallet_id)?;
    state.ledger.debit_wallet(&wallet_id, request.amount.as_ref())?;

    Ok(Json(MessageResponse {
        message: "Wallet debited successfully.".to_string(),
    }))
}

/// The wallet id is the owner's user id; mutations require them to match.
fn verify_ownership(user_id: &str, wallet_id: &str) -> Result<(), ApiError> {
    if user_id != wallet_id {
        return Err(ApiError::forbidden("You do not own this wallet"));
    }
    Ok(())
}
