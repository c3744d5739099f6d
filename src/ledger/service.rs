// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Ledger domain logic: create, get, credit, debit.
//!
//! Every operation validates its input before touching the store, then
//! delegates serialization to the store's transaction primitive. The
//! service itself holds no per-wallet state, so concurrent operations on
//! different wallets never contend inside this layer.

use std::sync::Arc;

use serde_json::Value;

use crate::models::Wallet;

use super::error::{LedgerError, LedgerResult};
use super::store::WalletStore;
use super::validate;

/// Wallet ledger service over an injected store handle.
#[derive(Clone)]
pub struct LedgerService {
    store: Arc<dyn WalletStore>,
}

impl LedgerService {
    pub fn new(store: Arc<dyn WalletStore>) -> Self {
        Self { store }
    }

    /// Create a wallet for `user_id` with a zero balance.
    ///
    /// The non-existence check and the write are one store transaction;
    /// racing creates for the same id produce exactly one wallet.
    pub fn create_wallet(&self, user_id: &str) -> LedgerResult<Wallet> {
        validate::wallet_id("userId", user_id)?;

        let wallet = Wallet::new(user_id.trim());
        self.store.create(&wallet)?;

        tracing::info!(wallet_id = %wallet.id, "wallet created");
        Ok(wallet)
    }

    /// Fetch the full wallet record. Read-only, no transaction.
    pub fn get_wallet(&self, wallet_id: &str) -> LedgerResult<Wallet> {
        validate::wallet_id("walletId", wallet_id)?;

        self.store
            .get(wallet_id)?
            .ok_or_else(|| LedgerError::NotFound(wallet_id.to_string()))
    }

    /// Credit `amount` to the wallet inside one store transaction.
    pub fn credit_wallet(&self, wallet_id: &str, amount: Option<&Value>) -> LedgerResult<()> {
        validate::wallet_id("walletId", wallet_id)?;
        let units = validate::amount(amount)?;

        self.store.mutate(wallet_id, &mut |wallet| {
            wallet.balance = wallet
                .balance
                .checked_add(units)
                .ok_or_else(|| LedgerError::invalid("amount", "would overflow the balance"))?;
            Ok(())
        })?;

        tracing::info!(wallet_id, amount = units, "wallet credited");
        Ok(())
    }

    /// Debit `amount` from the wallet inside one store transaction.
    ///
    /// Rejection is strict inequality: a debit equal to the balance
    /// succeeds and drains the wallet to zero.
    pub fn debit_wallet(&self, wallet_id: &str, amount: Option<&Value>) -> LedgerResult<()> {
        validate::wallet_id("walletId", wallet_id)?;
        let units = validate::amount(amount)?;

        self.store.mutate(wallet_id, &mut |wallet| {
            if units > wallet.balance {
                return Err(LedgerError::InsufficientFunds {
                    requested: units,
                    available: wallet.balance,
                });
            }
            wallet.balance -= units;
            Ok(())
        })?;

        tracing::info!(wallet_id, amount = units, "wallet debited");
        Ok(())
    }
}
