// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Persisted wallet record. One wallet per user; the wallet id is the
/// owning user's id and doubles as the store key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Wallet {
    /// Wallet identifier (equal to the owner's user id).
    pub id: String,
    /// Balance in minor currency units. Never negative.
    pub balance: u64,
    /// Set once at creation, never mutated.
    pub created_at: DateTime<Utc>,
}

impl Wallet {
    /// Fresh wallet with a zero balance.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            balance: 0,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_wallet_starts_at_zero() {
        let wallet = Wallet::new("user-1");
        assert_eq!(wallet.id, "user-1");
        assert_eq!(wallet.balance, 0);
    }

    #[test]
    fn wallet_json_roundtrip_keeps_fields() {
        let wallet = Wallet::new("user-2");
        let bytes = serde_json::to_vec(&wallet).unwrap();
        let back: Wallet = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back, wallet);
    }
}
