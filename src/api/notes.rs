// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Note endpoints: CRUD, sharing, and keyword search.
//!
//! Every handler requires a bearer token via the [`Auth`] extractor and
//! passes the caller's user id into the store, which enforces ownership
//! scoping.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    auth::Auth,
    error::ApiError,
    models::{Note, NoteId, NotePayload, SearchResponse, ShareNoteRequest, ShareNoteResponse,
        UserId},
    state::AppState,
};

#[derive(Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Keyword to look for in note titles and content.
    #[serde(default)]
    pub keyword: String,
}

/// Create a new note owned by the caller.
#[utoipa::path(
    post,
    path = "/api/notes",
    request_body = NotePayload,
    tag = "Notes",
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Note created", body = Note),
        (status = 400, description = "Missing title or content"),
        (status = 401, description = "Invalid or missing token"),
    )
)]
pub async fn create_note(
    Auth(user_id): Auth,
    State(state): State<AppState>,
    Json(payload): Json<NotePayload>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let mut store = state.store.write().await;
    let note = store.create_note(&user_id, payload)?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// List the caller's own notes.
///
/// Notes shared with the caller by other users are not included.
#[utoipa::path(
    get,
    path = "/api/notes",
    tag = "Notes",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Notes owned by the caller", body = [Note]),
        (status = 401, description = "Invalid or missing token"),
    )
)]
pub async fn get_notes(
    Auth(user_id): Auth,
    State(state): State<AppState>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(store.notes_by_owner(&user_id)))
}

/// Fetch one of the caller's notes by id.
#[utoipa::path(
    get,
    path = "/api/notes/{note_id}",
    params(("note_id" = String, Path, description = "Identifier of the note")),
    tag = "Notes",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The note", body = Note),
        (status = 400, description = "Malformed note id"),
        (status = 404, description = "No such note owned by the caller"),
    )
)]
pub async fn get_note_by_id(
    Auth(user_id): Auth,
    Path(note_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Note>, ApiError> {
    let note_id = NoteId::parse(&note_id)?;
    let store = state.store.read().await;
    Ok(Json(store.note_by_id(&user_id, &note_id)?))
}

/// Replace the title and content of one of the caller's notes.
#[utoipa::path(
    put,
    path = "/api/notes/{note_id}",
    params(("note_id" = String, Path, description = "Identifier of the note")),
    request_body = NotePayload,
    tag = "Notes",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated note", body = Note),
        (status = 400, description = "Malformed id or missing fields"),
        (status = 404, description = "No such note owned by the caller"),
    )
)]
pub async fn update_note(
    Auth(user_id): Auth,
    Path(note_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<NotePayload>,
) -> Result<Json<Note>, ApiError> {
    let note_id = NoteId::parse(&note_id)?;
    let mut store = state.store.write().await;
    Ok(Json(store.update_note(&user_id, &note_id, payload)?))
}

/// Delete one of the caller's notes.
#[utoipa::path(
    delete,
    path = "/api/notes/{note_id}",
    params(("note_id" = String, Path, description = "Identifier of the note")),
    tag = "Notes",
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Note deleted"),
        (status = 400, description = "Malformed note id"),
        (status = 404, description = "No such note owned by the caller"),
    )
)]
pub async fn delete_note(
    Auth(user_id): Auth,
    Path(note_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let note_id = NoteId::parse(&note_id)?;
    let mut store = state.store.write().await;
    store.delete_note(&user_id, &note_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Share one of the caller's notes with other users.
///
/// All target ids are validated and resolved before anything is written;
/// a single unknown id fails the whole request with every missing id listed.
#[utoipa::path(
    post,
    path = "/api/notes/{note_id}/share",
    params(("note_id" = String, Path, description = "Identifier of the note")),
    request_body = ShareNoteRequest,
    tag = "Notes",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Note shared", body = ShareNoteResponse),
        (status = 400, description = "Malformed or unknown user ids"),
        (status = 403, description = "Caller does not own the note"),
        (status = 404, description = "Note does not exist"),
    )
)]
pub async fn share_note(
    Auth(user_id): Auth,
    Path(note_id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<ShareNoteRequest>,
) -> Result<Json<ShareNoteResponse>, ApiError> {
    // Target ids first, then the note id; both before any lookup.
    let shared_with = request
        .shared_with
        .iter()
        .map(|raw| UserId::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;
    let note_id = NoteId::parse(&note_id)?;

    let mut store = state.store.write().await;
    let note = store.share_note(&user_id, &note_id, shared_with)?;
    Ok(Json(ShareNoteResponse {
        success: true,
        message: "Note shared successfully".to_string(),
        note,
    }))
}

/// Search the caller's notes by keyword.
///
/// Token-based matching over title and content; only the caller's own notes
/// are searched. Responds 404 when nothing matches.
#[utoipa::path(
    get,
    path = "/api/notes/search",
    params(SearchQuery),
    tag = "Notes",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Matching notes", body = SearchResponse),
        (status = 400, description = "Empty keyword"),
        (status = 404, description = "No notes matched"),
    )
)]
pub async fn search_notes(
    Auth(user_id): Auth,
    Query(params): Query<SearchQuery>,
    State(state): State<AppState>,
) -> Result<Json<SearchResponse>, ApiError> {
    let results = {
        let store = state.store.read().await;
        store.search_notes(&user_id, &params.keyword)?
    };

    if results.is_empty() {
        return Err(ApiError::not_found(format!(
            "No notes found with the keyword {}",
            params.keyword
        )));
    }

    Ok(Json(SearchResponse {
        success: true,
        data: results,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserIdentity;

    async fn seed_user(state: &AppState, username: &str) -> UserIdentity {
        let mut store = state.store.write().await;
        store.register_user(username, "pw").unwrap()
    }

    fn payload(title: &str, content: &str) -> Json<NotePayload> {
        Json(NotePayload {
            title: title.into(),
            content: content.into(),
        })
    }

    #[tokio::test]
    async fn create_then_get_roundtrips() {
        let state = AppState::default();
        let alice = seed_user(&state, "alice").await;

        let (status, Json(note)) = create_note(
            Auth(alice.id.clone()),
            State(state.clone()),
            payload(" M ", " Meeting notes "),
        )
        .await
        .expect("note creation succeeds");

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(note.title, "M");
        assert_eq!(note.content, "Meeting notes");
        assert_eq!(note.owner, alice.id);

        let Json(fetched) = get_note_by_id(
            Auth(alice.id.clone()),
            Path(note.id.as_str().to_string()),
            State(state.clone()),
        )
        .await
        .expect("fetch succeeds");
        assert_eq!(fetched, note);
    }

    #[tokio::test]
    async fn malformed_note_id_is_bad_request() {
        let state = AppState::default();
        let alice = seed_user(&state, "alice").await;

        let err = get_note_by_id(
            Auth(alice.id.clone()),
            Path("definitely-not-a-uuid".to_string()),
            State(state.clone()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_and_delete_scope_to_owner() {
        let state = AppState::default();
        let alice = seed_user(&state, "alice").await;
        let bob = seed_user(&state, "bob").await;

        let (_, Json(note)) = create_note(
            Auth(alice.id.clone()),
            State(state.clone()),
            payload("M", "body"),
        )
        .await
        .unwrap();

        let err = update_note(
            Auth(bob.id.clone()),
            Path(note.id.as_str().to_string()),
            State(state.clone()),
            payload("hijacked", "body"),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = delete_note(
            Auth(bob.id.clone()),
            Path(note.id.as_str().to_string()),
            State(state.clone()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let status = delete_note(
            Auth(alice.id.clone()),
            Path(note.id.as_str().to_string()),
            State(state.clone()),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn share_appends_ids_and_keeps_get_owner_only() {
        let state = AppState::default();
        let alice = seed_user(&state, "alice").await;
        let bob = seed_user(&state, "bob").await;

        let (_, Json(note)) = create_note(
            Auth(alice.id.clone()),
            State(state.clone()),
            payload("M", "Meeting notes"),
        )
        .await
        .unwrap();

        let Json(response) = share_note(
            Auth(alice.id.clone()),
            Path(note.id.as_str().to_string()),
            State(state.clone()),
            Json(ShareNoteRequest {
                shared_with: vec![bob.id.as_str().to_string()],
            }),
        )
        .await
        .expect("share succeeds");

        assert!(response.success);
        assert_eq!(response.message, "Note shared successfully");
        assert_eq!(response.note.shared_with, vec![bob.id.clone()]);

        // Shared readers still cannot fetch by id.
        let err = get_note_by_id(
            Auth(bob.id.clone()),
            Path(note.id.as_str().to_string()),
            State(state.clone()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn share_rejects_malformed_target_id_before_lookup() {
        let state = AppState::default();
        let alice = seed_user(&state, "alice").await;

        // Note id is also malformed; the target ids fail first.
        let err = share_note(
            Auth(alice.id.clone()),
            Path("also-bad".to_string()),
            State(state.clone()),
            Json(ShareNoteRequest {
                shared_with: vec!["bad-id".to_string()],
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("bad-id"));
    }

    #[tokio::test]
    async fn share_by_non_owner_is_forbidden() {
        let state = AppState::default();
        let alice = seed_user(&state, "alice").await;
        let bob = seed_user(&state, "bob").await;

        let (_, Json(note)) = create_note(
            Auth(alice.id.clone()),
            State(state.clone()),
            payload("M", "body"),
        )
        .await
        .unwrap();

        let err = share_note(
            Auth(bob.id.clone()),
            Path(note.id.as_str().to_string()),
            State(state.clone()),
            Json(ShareNoteRequest {
                shared_with: vec![bob.id.as_str().to_string()],
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn search_returns_summaries_or_404() {
        let state = AppState::default();
        let alice = seed_user(&state, "alice").await;
        create_note(
            Auth(alice.id.clone()),
            State(state.clone()),
            payload("M", "Meeting notes"),
        )
        .await
        .unwrap();

        let Json(response) = search_notes(
            Auth(alice.id.clone()),
            Query(SearchQuery {
                keyword: "meeting".into(),
            }),
            State(state.clone()),
        )
        .await
        .expect("search succeeds");
        assert!(response.success);
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].title, "M");

        let err = search_notes(
            Auth(alice.id.clone()),
            Query(SearchQuery {
                keyword: "unrelated".into(),
            }),
            State(state.clone()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = search_notes(
            Auth(alice.id.clone()),
            Query(SearchQuery {
                keyword: "".into(),
            }),
            State(state.clone()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn listing_returns_only_owned_notes() {
        let state = AppState::default();
        let alice = seed_user(&state, "alice").await;
        let bob = seed_user(&state, "bob").await;

        create_note(
            Auth(alice.id.clone()),
            State(state.clone()),
            payload("mine", "a"),
        )
        .await
        .unwrap();
        create_note(
            Auth(bob.id.clone()),
            State(state.clone()),
            payload("theirs", "b"),
        )
        .await
        .unwrap();

        let Json(notes) = get_notes(Auth(alice.id.clone()), State(state.clone()))
            .await
            .unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "mine");
    }
}
