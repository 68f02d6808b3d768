// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::TokenKeys;
use crate::store::InMemoryStore;

/// Shared application state.
///
/// The store sits behind a single `RwLock`; the token keys are immutable
/// after startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<InMemoryStore>>,
    pub token_keys: Arc<TokenKeys>,
}

impl AppState {
    pub fn new(store: InMemoryStore, token_keys: TokenKeys) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            token_keys: Arc::new(token_keys),
        }
    }
}

impl Default for AppState {
    /// State with an empty store and a throwaway signing secret. Used by
    /// tests; `main` always constructs state from `JWT_SECRET`.
    fn default() -> Self {
        Self::new(
            InMemoryStore::new(),
            TokenKeys::from_secret(b"insecure-default-secret"),
        )
    }
}
