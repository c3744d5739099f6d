// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Ledger error taxonomy.

use thiserror::Error;

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors raised by the ledger service and the wallet store.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A request field is missing or malformed. Validation runs before any
    /// store access, so this never leaves partial side effects.
    #[error("{field} {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    /// No wallet with the given id.
    #[error("Wallet not found: {0}")]
    NotFound(String),

    /// A wallet with the given id already exists.
    #[error("Wallet already exists: {0}")]
    AlreadyExists(String),

    /// Debit larger than the current balance. Equal amounts are allowed
    /// and drain the wallet to exactly zero.
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: u64, available: u64 },

    /// The store could not commit within its retry bound. Retryable.
    #[error("Transaction could not commit: {0}")]
    Transient(String),

    /// Backend storage fault (I/O, corruption). Not retryable by callers.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_formats_field_and_reason() {
        let err = LedgerError::invalid("amount", "must be positive");
        assert_eq!(err.to_string(), "amount must be positive");
    }

    #[test]
    fn insufficient_funds_reports_both_amounts() {
        let err = LedgerError::InsufficientFunds {
            requested: 100,
            available: 60,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested 100, available 60"
        );
    }
}
