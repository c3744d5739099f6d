// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Bearer-token authentication for the wallet ledger API.
//!
//! ## Auth Flow
//!
//! 1. Client calls `POST /generate-token` with a user id
//! 2. Server issues an HS256 JWT (`sub` = user id) signed with the
//!    configured secret
//! 3. Client sends `Authorization: Bearer <token>` on protected routes
//! 4. The [`Auth`] extractor verifies signature and expiry and attaches
//!    the caller identity for handlers
//!
//! ## Security
//!
//! - Missing or malformed `Authorization` headers are rejected with 401
//! - Verification failures (bad signature, expired token) are 403
//! - Clock skew tolerance is 60 seconds

pub mod claims;
pub mod error;
pub mod extractor;
pub mod tokens;

pub use claims::{AuthenticatedUser, Claims};
pub use error::AuthError;
pub use extractor::Auth;
pub use tokens::TokenService;
