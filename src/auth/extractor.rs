// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for authenticated callers.
//!
//! Use the `Auth` extractor in handlers to require a valid bearer token:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(user_id): Auth) -> impl IntoResponse {
//!     // user_id is the caller's UserId
//! }
//! ```

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use super::{token, AuthError};
use crate::{models::UserId, state::AppState};

/// Extractor that validates the `Authorization: Bearer <JWT>` header and
/// yields the caller's user id.
///
/// Rejections map to 401 via [`AuthError`]. Validation happens against the
/// process-wide token keys in [`AppState`]; no store access is involved.
#[derive(Debug)]
pub struct Auth(pub UserId);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthHeader)?
            .to_str()
            .map_err(|_| AuthError::InvalidAuthHeader)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidAuthHeader)?;

        let user_id = token::validate(&state.token_keys, token)?;

        Ok(Auth(user_id))
    }
}
