// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::ledger::LedgerError;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

/// Map domain errors onto HTTP statuses.
///
/// `Transient` is surfaced as 503 so callers can tell a retryable commit
/// failure apart from domain rejections. Backend faults become an opaque
/// 500; the detail goes to the log, never to the client.
impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match &err {
            LedgerError::InvalidInput { .. } | LedgerError::InsufficientFunds { .. } => {
                ApiError::bad_request(err.to_string())
            }
            LedgerError::NotFound(_) => ApiError::not_found(err.to_string()),
            LedgerError::AlreadyExists(_) => ApiError::conflict(err.to_string()),
            LedgerError::Transient(_) => {
                ApiError::service_unavailable("Temporary conflict, please retry")
            }
            LedgerError::Storage(detail) => {
                tracing::error!(error = %detail, "storage failure");
                ApiError::internal("Internal storage error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn constructors_set_status_and_message() {
        let nf = ApiError::not_found("missing");
        assert_eq!(nf.status, StatusCode::NOT_FOUND);
        assert_eq!(nf.message, "missing");

        let bad = ApiError::bad_request("bad");
        assert_eq!(bad.status, StatusCode::BAD_REQUEST);
        assert_eq!(bad.message, "bad");

        let dup = ApiError::conflict("dup");
        assert_eq!(dup.status, StatusCode::CONFLICT);
        assert_eq!(dup.message, "dup");
    }

    #[test]
    fn ledger_errors_map_to_expected_statuses() {
        let cases = [
            (
                ApiError::from(LedgerError::invalid("amount", "must be positive")),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(LedgerError::NotFound("u1".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(LedgerError::AlreadyExists("u1".into())),
                StatusCode::CONFLICT,
            ),
            (
                ApiError::from(LedgerError::InsufficientFunds {
                    requested: 100,
                    available: 60,
                }),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(LedgerError::Transient("commit".into())),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                ApiError::from(LedgerError::Storage("io".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.status, status);
        }
    }

    #[test]
    fn storage_detail_is_not_leaked() {
        let err = ApiError::from(LedgerError::Storage("disk sector 42 corrupt".into()));
        assert!(!err.message.contains("sector"));
    }

    #[tokio::test]
    async fn into_response_returns_json_body() {
        let response = ApiError::bad_request("bad data").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body_bytes.to_vec()).unwrap();
        assert_eq!(body, r#"{"error":"bad data"}"#);
    }
}
