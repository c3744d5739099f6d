// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet store capability trait and the in-memory implementation.
//!
//! The ledger service is storage-agnostic: it talks to any [`WalletStore`],
//! and all mutual exclusion between concurrent balance mutations is
//! delegated to the store's `mutate` transaction. The production
//! implementation is the redb-backed `WalletDb` in `crate::storage`;
//! [`MemStore`] honors the same contract and backs tests and
//! `AppState::default()`.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::Wallet;

use super::error::{LedgerError, LedgerResult};

/// Closure applied to a wallet inside a store transaction.
pub type MutateFn<'a> = &'a mut dyn FnMut(&mut Wallet) -> LedgerResult<()>;

/// Document store keyed by wallet id with an atomic read-modify-write
/// primitive.
pub trait WalletStore: Send + Sync {
    /// Plain read outside any transaction. Staleness is acceptable.
    fn get(&self, id: &str) -> LedgerResult<Option<Wallet>>;

    /// Atomic check-then-create. The existence check and the write belong
    /// to the same transaction; a create/create race on the same id
    /// yields exactly one wallet and one `AlreadyExists`.
    fn create(&self, wallet: &Wallet) -> LedgerResult<()>;

    /// Read-modify-write inside one transaction. `f` sees the latest
    /// committed wallet; a domain error from `f` aborts the transaction
    /// with no write. A commit conflict re-runs `f` against a fresh read
    /// a bounded number of times before failing with
    /// [`LedgerError::Transient`].
    fn mutate(&self, id: &str, f: MutateFn<'_>) -> LedgerResult<()>;
}

/// In-memory wallet store. The map mutex serializes transactions the way
/// redb's single-writer lock does in production.
#[derive(Default)]
pub struct MemStore {
    wallets: Mutex<HashMap<String, Wallet>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored wallets.
    pub fn len(&self) -> usize {
        self.wallets.lock().expect("wallet map poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WalletStore for MemStore {
    fn get(&self, id: &str) -> LedgerResult<Option<Wallet>> {
        let wallets = self.wallets.lock().expect("wallet map poisoned");
        Ok(wallets.get(id).cloned())
    }

    fn create(&self, wallet: &Wallet) -> LedgerResult<()> {
        let mut wallets = self.wallets.lock().expect("wallet map poisoned");
        if wallets.contains_key(&wallet.id) {
            return Err(LedgerError::AlreadyExists(wallet.id.clone()));
        }
        wallets.insert(wallet.id.clone(), wallet.clone());
        Ok(())
    }

    fn mutate(&self, id: &str, f: MutateFn<'_>) -> LedgerResult<()> {
        let mut wallets = self.wallets.lock().expect("wallet map poisoned");
        let current = wallets
            .get(id)
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))?;

        // Work on a copy so a domain error from `f` writes nothing back.
        let mut draft = current.clone();
        f(&mut draft)?;
        wallets.insert(id.to_string(), draft);
        Ok(())
    }
}
