// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{CredentialsRequest, Note, NoteId, NotePayload, NoteSummary, SearchResponse,
        ShareNoteRequest, ShareNoteResponse, TokenResponse, UserId, UserIdentity},
    state::AppState,
};

pub mod auth;
pub mod health;
pub mod notes;

pub fn router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login));

    let notes_routes = Router::new()
        .route("/search", get(notes::search_notes))
        .route("/", get(notes::get_notes).post(notes::create_note))
        .route(
            "/{note_id}",
            get(notes::get_note_by_id)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
        .route("/{note_id}/share", post(notes::share_note));

    let api_routes = Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api/notes", notes_routes)
        .route("/health", get(health::health))
        .with_state(state);

    Router::new()
        .merge(api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::signup,
        auth::login,
        notes::create_note,
        notes::get_notes,
        notes::get_note_by_id,
        notes::update_note,
        notes::delete_note,
        notes::share_note,
        notes::search_notes,
        health::health
    ),
    components(
        schemas(
            UserId,
            NoteId,
            UserIdentity,
            CredentialsRequest,
            TokenResponse,
            Note,
            NotePayload,
            NoteSummary,
            ShareNoteRequest,
            ShareNoteResponse,
            SearchResponse,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Notes", description = "Note management, sharing, and search"),
        (name = "Health", description = "Liveness probe")
    )
)]
struct ApiDoc;
