// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Wallet Ledger Core
//!
//! Domain logic for the balance-mutation protocol:
//!
//! - `service` — create/get/credit/debit operations
//! - `store` — the [`WalletStore`] transaction contract and in-memory fake
//! - `validate` — fail-fast input validation and numeric coercion
//! - `error` — the ledger error taxonomy
//!
//! Mutual exclusion between concurrent mutations of the same wallet is
//! delegated entirely to the store; the service holds no locks and no
//! in-memory balances.

pub mod error;
pub mod service;
pub mod store;
pub mod validate;

pub use error::{LedgerError, LedgerResult};
pub use service::LedgerService;
pub use store::{MemStore, WalletStore};
