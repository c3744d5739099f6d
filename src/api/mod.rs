// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{models::Wallet, state::AppState};

pub mod health;
pub mod token;
pub mod wallet;

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/generate-token", post(token::generate_token))
        .route("/wallet", post(wallet::create_wallet))
        .route("/wallet/{id}", get(wallet::get_wallet))
        .route("/wallet/{id}/credit", put(wallet::credit_wallet))
        .route("/wallet/{id}/debit", put(wallet::debit_wallet))
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .with_state(state);

    Router::new()
        .merge(api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CorsLayer::permissive()),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        token::generate_token,
        wallet::create_wallet,
        wallet::get_wallet,
        wallet::credit_wallet,
        wallet::debit_wallet,
        health::health,
        health::liveness
    ),
    components(
        schemas(
            Wallet,
            token::GenerateTokenRequest,
            token::TokenResponse,
            wallet::CreateWalletRequest,
            wallet::CreateWalletResponse,
            wallet::AmountRequest,
            wallet::MessageResponse,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Auth", description = "Bearer token issuance"),
        (name = "Wallet", description = "Wallet creation, balance reads, credit and debit"),
        (name = "Health", description = "Service health probes")
    )
)]
struct ApiDoc;
