// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Embedded wallet database backed by redb (pure Rust, ACID).
//!
//! ## Table Layout
//!
//! - `wallets`: wallet_id → serialized Wallet (JSON bytes)
//!
//! redb serializes write transactions, so every `mutate` reads the latest
//! committed wallet and its write either commits in full or not at all.
//! That single-writer transaction is the only source of serialization
//! truth for balance mutations.

use std::path::Path;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};

use crate::ledger::error::{LedgerError, LedgerResult};
use crate::ledger::store::{MutateFn, WalletStore};
use crate::models::Wallet;

/// Primary table: wallet_id → serialized Wallet (JSON bytes).
const WALLETS: TableDefinition<&str, &[u8]> = TableDefinition::new("wallets");

/// Bound on commit retries before an operation fails as transient.
const MAX_COMMIT_RETRIES: u32 = 3;

// =============================================================================
// Error Type
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum WalletDbError {
    #[error("redb database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("redb transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("redb table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("redb storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("redb commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<WalletDbError> for LedgerError {
    fn from(err: WalletDbError) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

// =============================================================================
// WalletDb
// =============================================================================

/// Embedded ACID wallet store.
pub struct WalletDb {
    db: Database,
}

impl WalletDb {
    /// Open (or create) the database at the given path.
    pub fn open(path: &Path) -> Result<Self, WalletDbError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let db = Database::create(path)?;

        // Pre-create the table so later read transactions don't fail
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(WALLETS)?;
        }
        write_txn.commit()?;

        Ok(Self { db })
    }

    fn read_wallet(&self, id: &str) -> Result<Option<Wallet>, WalletDbError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(WALLETS)?;
        match table.get(id)? {
            Some(value) => {
                let wallet: Wallet = serde_json::from_slice(value.value())?;
                Ok(Some(wallet))
            }
            None => Ok(None),
        }
    }
}

impl WalletStore for WalletDb {
    fn get(&self, id: &str) -> LedgerResult<Option<Wallet>> {
        Ok(self.read_wallet(id)?)
    }

    fn create(&self, wallet: &Wallet) -> LedgerResult<()> {
        let json = serde_json::to_vec(wallet).map_err(WalletDbError::from)?;

        let write_txn = self.db.begin_write().map_err(WalletDbError::from)?;
        {
            let mut table = write_txn.open_table(WALLETS).map_err(WalletDbError::from)?;

            // Existence check and insert share this transaction; a racing
            // create for the same id sees the committed wallet.
            if table.get(wallet.id.as_str()).map_err(WalletDbError::from)?.is_some() {
                return Err(LedgerError::AlreadyExists(wallet.id.clone()));
            }
            table
                .insert(wallet.id.as_str(), json.as_slice())
                .map_err(WalletDbError::from)?;
        }
        write_txn.commit().map_err(WalletDbError::from)?;
        Ok(())
    }

    fn mutate(&self, id: &str, f: MutateFn<'_>) -> LedgerResult<()> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let write_txn = self.db.begin_write().map_err(WalletDbError::from)?;
            {
                let mut table = write_txn.open_table(WALLETS).map_err(WalletDbError::from)?;

                let bytes = match table.get(id).map_err(WalletDbError::from)? {
                    Some(value) => value.value().to_vec(),
                    None => return Err(LedgerError::NotFound(id.to_string())),
                };
                let mut wallet: Wallet =
                    serde_json::from_slice(&bytes).map_err(WalletDbError::from)?;

                // Domain errors drop the transaction uncommitted.
                f(&mut wallet)?;

                let json = serde_json::to_vec(&wallet).map_err(WalletDbError::from)?;
                table
                    .insert(id, json.as_slice())
                    .map_err(WalletDbError::from)?;
            }

            match write_txn.commit() {
                Ok(()) => return Ok(()),
                Err(e) => {
                    if attempt >= MAX_COMMIT_RETRIES {
                        return Err(LedgerError::Transient(e.to_string()));
                    }
                    tracing::warn!(
                        wallet_id = id,
                        attempt,
                        error = %e,
                        "wallet transaction commit failed, retrying with a fresh read"
                    );
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn temp_db() -> (WalletDb, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let db = WalletDb::open(&dir.path().join("wallets.redb")).unwrap();
        (db, dir)
    }

    #[test]
    fn create_and_get_wallet() {
        let (db, _dir) = temp_db();
        db.create(&Wallet::new("u1")).unwrap();

        let wallet = db.get("u1").unwrap().unwrap();
        assert_eq!(wallet.id, "u1");
        assert_eq!(wallet.balance, 0);
        assert!(db.get("u2").unwrap().is_none());
    }

    #[test]
    fn duplicate_create_fails_with_already_exists() {
        let (db, _dir) = temp_db();
        db.create(&Wallet::new("u1")).unwrap();

        let err = db.create(&Wallet::new("u1")).unwrap_err();
        assert!(matches!(err, LedgerError::AlreadyExists(_)));
    }

    #[test]
    fn mutate_missing_wallet_is_not_found() {
        let (db, _dir) = temp_db();
        let err = db.mutate("ghost", &mut |_| Ok(())).unwrap_err();
        assert!(matches!(err, LedgerError::NotFound(_)));
    }

    #[test]
    fn mutate_commits_balance_change() {
        let (db, _dir) = temp_db();
        db.create(&Wallet::new("u1")).unwrap();

        db.mutate("u1", &mut |wallet| {
            wallet.balance += 500;
            Ok(())
        })
        .unwrap();

        assert_eq!(db.get("u1").unwrap().unwrap().balance, 500);
    }

    #[test]
    fn domain_error_leaves_wallet_untouched() {
        let (db, _dir) = temp_db();
        db.create(&Wallet::new("u1")).unwrap();

        let err = db
            .mutate("u1", &mut |wallet| {
                wallet.balance += 999;
                Err(LedgerError::InsufficientFunds {
                    requested: 1,
                    available: 0,
                })
            })
            .unwrap_err();

        assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
        assert_eq!(db.get("u1").unwrap().unwrap().balance, 0);
    }

    #[test]
    fn wallets_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallets.redb");

        {
            let db = WalletDb::open(&path).unwrap();
            db.create(&Wallet::new("u1")).unwrap();
            db.mutate("u1", &mut |wallet| {
                wallet.balance += 42;
                Ok(())
            })
            .unwrap();
        }

        let reopened = WalletDb::open(&path).unwrap();
        assert_eq!(reopened.get("u1").unwrap().unwrap().balance, 42);
    }

    #[test]
    fn concurrent_credits_lose_no_updates() {
        let (db, _dir) = temp_db();
        db.create(&Wallet::new("u1")).unwrap();
        let db = Arc::new(db);

        const THREADS: u64 = 8;
        const CREDITS_PER_THREAD: u64 = 25;
        const AMOUNT: u64 = 10;

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let db = Arc::clone(&db);
                thread::spawn(move || {
                    for _ in 0..CREDITS_PER_THREAD {
                        db.mutate("u1", &mut |wallet| {
                            wallet.balance += AMOUNT;
                            Ok(())
                        })
                        .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(
            db.get("u1").unwrap().unwrap().balance,
            THREADS * CREDITS_PER_THREAD * AMOUNT
        );
    }
}
