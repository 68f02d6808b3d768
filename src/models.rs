// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response data structures used by the REST API. All wire-facing
//! types derive `Serialize`, `Deserialize`, and `ToSchema` for automatic JSON
//! handling and OpenAPI documentation.
//!
//! ## Identifier Types
//!
//! [`UserId`] and [`NoteId`] wrap UUID strings. They provide type safety and
//! a single place for well-formedness validation: identifiers arriving from
//! the outside (path parameters, share payloads) go through `parse`, which
//! rejects anything that is not a UUID before the store is touched.
//!
//! ## Model Categories
//!
//! - **Users**: registration/login payloads and the public identity
//! - **Notes**: the note document, create/update payloads, search summaries
//! - **Sharing**: share request and response envelopes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ApiError;

// =============================================================================
// Identifier Types
// =============================================================================

/// Unique identifier of a registered user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(pub String);

impl UserId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        UserId(Uuid::new_v4().to_string())
    }

    /// Validate an externally supplied identifier.
    pub fn parse(value: &str) -> Result<Self, ApiError> {
        Uuid::parse_str(value)
            .map(|_| UserId(value.to_string()))
            .map_err(|_| ApiError::invalid_input(format!("Invalid user id: {value}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId(value.to_string())
    }
}

/// Unique identifier of a note.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct NoteId(pub String);

impl NoteId {
    pub fn generate() -> Self {
        NoteId(Uuid::new_v4().to_string())
    }

    pub fn parse(value: &str) -> Result<Self, ApiError> {
        Uuid::parse_str(value)
            .map(|_| NoteId(value.to_string()))
            .map_err(|_| ApiError::invalid_input(format!("Invalid note id: {value}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// User Models
// =============================================================================

/// A registered user as persisted in the store.
///
/// Never serialized to the wire; responses use [`UserIdentity`], which
/// carries no password material.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    /// Unique username (NFKC-normalized, trimmed).
    pub username: String,
    /// Argon2id PHC-format hash of the password. The plaintext is never stored.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Public identity of a user, returned from signup.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: UserId,
    pub username: String,
}

/// Username and password, accepted by both signup and login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Bearer token returned from a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

// =============================================================================
// Note Models
// =============================================================================

/// A note owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// The user who created this note. Ownership never transfers.
    pub owner: UserId,
    /// Users granted read access. Append-only; duplicates are possible when
    /// the same id is shared twice.
    pub shared_with: Vec<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Title and content payload for creating or replacing a note.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotePayload {
    pub title: String,
    pub content: String,
}

/// Title/content projection returned by keyword search.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct NoteSummary {
    pub title: String,
    pub content: String,
}

// =============================================================================
// Sharing Models
// =============================================================================

/// Request to share a note with other users.
///
/// Ids arrive as raw strings and are validated before any lookup.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShareNoteRequest {
    #[serde(rename = "sharedWith")]
    pub shared_with: Vec<String>,
}

/// Response envelope for a successful share.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShareNoteResponse {
    pub success: bool,
    pub message: String,
    pub note: Note,
}

/// Response envelope for keyword search.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub success: bool,
    pub data: Vec<NoteSummary>,
}
