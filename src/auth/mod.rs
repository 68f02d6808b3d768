// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Local username/password authentication with HS256 JWTs.
//!
//! ## Auth Flow
//!
//! 1. Client registers via `POST /api/auth/signup` (password stored as an
//!    Argon2id hash, never as plaintext)
//! 2. Client logs in via `POST /api/auth/login` and receives a JWT
//! 3. Client sends `Authorization: Bearer <JWT>` on every notes request
//! 4. The [`Auth`] extractor verifies the signature and expiry and hands the
//!    handler the caller's user id
//!
//! ## Security
//!
//! - The signing secret is loaded once at startup and never mutated
//! - Tokens expire one hour after issuance
//! - Token validation is a pure cryptographic check; it never touches the store
//! - Clock skew tolerance is 60 seconds

pub mod error;
pub mod extractor;
pub mod password;
pub mod token;

pub use error::AuthError;
pub use extractor::Auth;
pub use token::TokenKeys;
