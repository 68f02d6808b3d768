// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Signup and login endpoints.

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    auth::token,
    error::ApiError,
    models::{CredentialsRequest, TokenResponse, UserIdentity},
    state::AppState,
};

/// Register a new user.
///
/// The password is hashed with Argon2id before it is persisted; the response
/// never carries password material.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = CredentialsRequest,
    tag = "Auth",
    responses(
        (status = 201, description = "User created", body = UserIdentity),
        (status = 400, description = "Missing username or password"),
        (status = 409, description = "Username already taken"),
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<UserIdentity>), ApiError> {
    let mut store = state.store.write().await;
    let identity = store.register_user(&request.username, &request.password)?;
    tracing::info!(user_id = %identity.id, "user registered");
    Ok((StatusCode::CREATED, Json(identity)))
}

/// Authenticate and receive a session token.
///
/// The token is an HS256 JWT valid for one hour.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = CredentialsRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "JWT session token", body = TokenResponse),
        (status = 401, description = "Invalid credentials"),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let identity = {
        let store = state.store.read().await;
        store.verify_credentials(&request.username, &request.password)?
    };

    let token = token::issue(&state.token_keys, &identity.id)
        .map_err(|e| ApiError::internal(e.to_string()))?;
    Ok(Json(TokenResponse { token }))
}
