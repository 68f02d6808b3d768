// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory store for users and notes.
//!
//! All note operations are scoped by the caller's user id: a note that exists
//! under a different owner is indistinguishable from a note that does not
//! exist. The one exception is [`InMemoryStore::share_note`], which looks the
//! note up globally so that a non-owner can be told apart (403) from a
//! missing note (404).
//!
//! The store is wrapped in `Arc<RwLock<_>>` by [`crate::state::AppState`];
//! each operation runs under a single lock guard, so the read-validate-write
//! sequence in `share_note` cannot interleave with a concurrent share on the
//! same note.

use std::collections::HashMap;

use chrono::Utc;
use unicode_normalization::UnicodeNormalization;

use crate::auth::password;
use crate::error::ApiError;
use crate::models::{Note, NoteId, NotePayload, NoteSummary, User, UserId, UserIdentity};

#[derive(Default)]
pub struct InMemoryStore {
    users: HashMap<UserId, User>,
    notes: HashMap<NoteId, Note>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Credentials
    // -------------------------------------------------------------------------

    /// Register a new user. The password is stored only as an Argon2id hash.
    pub fn register_user(&mut self, username: &str, pass: &str) -> Result<UserIdentity, ApiError> {
        let username = normalize_username(username);
        if username.is_empty() {
            return Err(ApiError::invalid_input("Username is required"));
        }
        if pass.is_empty() {
            return Err(ApiError::invalid_input("Password is required"));
        }

        if self.users.values().any(|user| user.username == username) {
            return Err(ApiError::conflict("User already exists"));
        }

        let password_hash = password::hash_password(pass)?;
        let user = User {
            id: UserId::generate(),
            username,
            password_hash,
            created_at: Utc::now(),
        };
        let identity = UserIdentity {
            id: user.id.clone(),
            username: user.username.clone(),
        };
        self.users.insert(user.id.clone(), user);
        Ok(identity)
    }

    /// Check a username/password pair against the stored hash.
    ///
    /// Unknown usernames and wrong passwords fail with the same message so
    /// callers cannot probe which of the two was wrong.
    pub fn verify_credentials(&self, username: &str, pass: &str) -> Result<UserIdentity, ApiError> {
        let username = normalize_username(username);
        let user = self
            .users
            .values()
            .find(|user| user.username == username)
            .ok_or_else(|| ApiError::unauthenticated("Invalid credentials"))?;

        if password::verify_password(pass, &user.password_hash)? {
            Ok(UserIdentity {
                id: user.id.clone(),
                username: user.username.clone(),
            })
        } else {
            Err(ApiError::unauthenticated("Invalid credentials"))
        }
    }

    // -------------------------------------------------------------------------
    // Notes
    // -------------------------------------------------------------------------

    pub fn create_note(&mut self, owner: &UserId, payload: NotePayload) -> Result<Note, ApiError> {
        let (title, content) = validate_note_fields(&payload)?;
        let now = Utc::now();
        let note = Note {
            id: NoteId::generate(),
            title,
            content,
            owner: owner.clone(),
            shared_with: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.notes.insert(note.id.clone(), note.clone());
        Ok(note)
    }

    /// All notes owned by `owner`. Notes merely shared with the caller are
    /// never included.
    pub fn notes_by_owner(&self, owner: &UserId) -> Vec<Note> {
        self.notes
            .values()
            .filter(|note| &note.owner == owner)
            .cloned()
            .collect()
    }

    pub fn note_by_id(&self, owner: &UserId, note_id: &NoteId) -> Result<Note, ApiError> {
        self.notes
            .get(note_id)
            .filter(|note| &note.owner == owner)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Note not found"))
    }

    pub fn update_note(
        &mut self,
        owner: &UserId,
        note_id: &NoteId,
        payload: NotePayload,
    ) -> Result<Note, ApiError> {
        let (title, content) = validate_note_fields(&payload)?;
        let note = self
            .notes
            .get_mut(note_id)
            .filter(|note| &note.owner == owner)
            .ok_or_else(|| ApiError::not_found("Note not found"))?;

        note.title = title;
        note.content = content;
        note.updated_at = Utc::now();
        Ok(note.clone())
    }

    pub fn delete_note(&mut self, owner: &UserId, note_id: &NoteId) -> Result<(), ApiError> {
        let owned = self
            .notes
            .get(note_id)
            .is_some_and(|note| &note.owner == owner);
        if !owned {
            return Err(ApiError::not_found("Note not found"));
        }
        self.notes.remove(note_id);
        Ok(())
    }

    /// Share a note with other users. Only the owner may share.
    ///
    /// All checks run before any mutation: the note must exist, its owner
    /// record must still resolve, the caller must be the owner, and every
    /// target id must belong to a registered user (all missing ids are
    /// reported together). Ids are appended as-is; sharing the same id twice
    /// leaves a duplicate entry.
    pub fn share_note(
        &mut self,
        caller: &UserId,
        note_id: &NoteId,
        shared_with: Vec<UserId>,
    ) -> Result<Note, ApiError> {
        let note = self
            .notes
            .get(note_id)
            .ok_or_else(|| ApiError::not_found("Note not found"))?;

        if !self.users.contains_key(&note.owner) {
            return Err(ApiError::invalid_input("Note owner could not be resolved"));
        }

        if &note.owner != caller {
            return Err(ApiError::forbidden(
                "You are not authorized to share this note",
            ));
        }

        let missing: Vec<String> = shared_with
            .iter()
            .filter(|id| !self.users.contains_key(id))
            .map(|id| id.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ApiError::invalid_input(format!(
                "Unknown user ids: {}",
                missing.join(", ")
            )));
        }

        let note = self
            .notes
            .get_mut(note_id)
            .ok_or_else(|| ApiError::not_found("Note not found"))?;
        note.shared_with.extend(shared_with);
        Ok(note.clone())
    }

    /// Keyword search over the caller's own notes.
    ///
    /// Matching is token-based: title and content are split into lowercased
    /// alphanumeric tokens and compared against the query tokens with a
    /// simple plural fold, so "meeting" matches "meetings" but not
    /// "meetingroom".
    pub fn search_notes(
        &self,
        owner: &UserId,
        keyword: &str,
    ) -> Result<Vec<NoteSummary>, ApiError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(ApiError::invalid_input("Search query cannot be empty."));
        }

        let query_tokens: Vec<String> = tokenize(keyword).collect();
        let results = self
            .notes
            .values()
            .filter(|note| &note.owner == owner)
            .filter(|note| {
                tokenize(&note.title)
                    .chain(tokenize(&note.content))
                    .any(|token| query_tokens.iter().any(|query| tokens_match(query, &token)))
            })
            .map(|note| NoteSummary {
                title: note.title.clone(),
                content: note.content.clone(),
            })
            .collect();
        Ok(results)
    }
}

/// NFKC-normalize and trim a username before uniqueness checks.
fn normalize_username(raw: &str) -> String {
    raw.nfkc().collect::<String>().trim().to_string()
}

fn validate_note_fields(payload: &NotePayload) -> Result<(String, String), ApiError> {
    let title = payload.title.trim();
    if title.is_empty() {
        return Err(ApiError::invalid_input("Title is required"));
    }
    let content = payload.content.trim();
    if content.is_empty() {
        return Err(ApiError::invalid_input("Content is required"));
    }
    Ok((title.to_string(), content.to_string()))
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase())
}

/// Fold a trailing plural "s" so close word forms compare equal.
fn stem(token: &str) -> &str {
    match token.strip_suffix('s') {
        Some(base) if base.len() >= 3 && !base.ends_with('s') => base,
        _ => token,
    }
}

fn tokens_match(query: &str, token: &str) -> bool {
    query == token || stem(query) == stem(token)
}
