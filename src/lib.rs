// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Relational Notes - Multi-User Note Service
//!
//! This crate provides a note-taking backend: users register and log in,
//! manage personal notes, share notes with other users, and search their own
//! notes by keyword.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Password hashing and JWT session tokens
//! - `store` - In-memory user and note storage with ownership scoping
//! - `error` - Error classification and HTTP status mapping

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
