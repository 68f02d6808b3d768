// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Service error type and HTTP status mapping.
//!
//! Every fallible store and handler operation returns [`ApiError`]. The enum
//! is the single classification of failures; the `IntoResponse` impl is the
//! one place error kinds are mapped to transport status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or missing fields, malformed IDs, empty search keyword.
    #[error("{0}")]
    InvalidInput(String),

    /// Missing, invalid, or expired credentials.
    #[error("{0}")]
    Unauthenticated(String),

    /// A non-owner attempting an owner-only action.
    #[error("{0}")]
    Forbidden(String),

    /// No matching owned resource.
    #[error("{0}")]
    NotFound(String),

    /// Duplicate username at registration.
    #[error("{0}")]
    Conflict(String),

    /// Unclassified failure. The payload is logged; callers see a fixed
    /// generic message.
    #[error("Something went wrong")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    /// HTTP status for this error kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(ref detail) = self {
            tracing::error!(detail = %detail, "internal error");
        }
        let status = self.status_code();
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn constructors_set_kind_and_message() {
        let nf = ApiError::not_found("Note not found");
        assert_eq!(nf.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(nf.to_string(), "Note not found");

        let bad = ApiError::invalid_input("bad");
        assert_eq!(bad.status_code(), StatusCode::BAD_REQUEST);

        let conflict = ApiError::conflict("User already exists");
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);

        let forbidden = ApiError::forbidden("nope");
        assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);

        let unauth = ApiError::unauthenticated("Invalid credentials");
        assert_eq!(unauth.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn internal_error_hides_detail() {
        let err = ApiError::internal("argon2 backend exploded");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Something went wrong");
    }

    #[tokio::test]
    async fn into_response_returns_json_body() {
        let response = ApiError::invalid_input("bad data").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body_bytes.to_vec()).unwrap();
        assert_eq!(body, r#"{"error":"bad data"}"#);
    }
}
