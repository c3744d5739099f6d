// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::auth::TokenService;
use crate::ledger::{LedgerService, MemStore, WalletStore};

#[derive(Clone)]
pub struct AppState {
    pub ledger: LedgerService,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(store: Arc<dyn WalletStore>, tokens: TokenService) -> Self {
        Self {
            ledger: LedgerService::new(store),
            tokens: Arc::new(tokens),
        }
    }
}

impl Default for AppState {
    /// In-memory state for tests: MemStore and a fixed dev signing secret.
    fn default() -> Self {
        Self::new(
            Arc::new(MemStore::new()),
            TokenService::new(b"insecure-dev-secret", 3600),
        )
    }
}
