// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Persistent Storage Module
//!
//! One redb database file holds all wallet documents. The database is
//! opened once at startup and injected into the ledger service; there is
//! no module-level store handle.
//!
//! ## Storage Layout
//!
//! ```text
//! {DATA_DIR}/wallets.redb
//!   table "wallets": wallet_id → Wallet (JSON bytes)
//! ```

pub mod wallet_db;

pub use wallet_db::{WalletDb, WalletDbError};
