// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet Ledger - Minimal HTTP Wallet Ledger Service
//!
//! This crate provides a small wallet ledger over HTTP: create a wallet,
//! fetch its balance, credit it, debit it. Concurrent balance mutations
//! are serialized through an embedded ACID store so no update is lost and
//! no wallet goes negative.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Bearer token issuance and verification
//! - `ledger` - Core domain logic and the store transaction contract
//! - `storage` - redb-backed persistent wallet store

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod state;
pub mod storage;
