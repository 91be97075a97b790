/*
 * Copyright 2025 Huddle Contributors
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Axum extractor for the identity provider's session token.
//!
//! The token is opaque to this service: authentication itself is the
//! identity provider's job. This extractor only pulls the raw token from
//! the `__session` cookie (browser) or the `Authorization: Bearer` header
//! (non-browser callers); [`crate::identity::resolve_principal`] exchanges
//! it for a principal.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::error::AppError;

const SESSION_COOKIE: &str = "__session";

/// Extractor carrying the caller's raw session token.
///
/// Usage in a handler:
/// ```ignore
/// async fn my_handler(AuthSession(token): AuthSession) { ... }
/// ```
#[derive(Debug)]
pub struct AuthSession(pub String);

impl<S: Send + Sync> FromRequestParts<S> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(token) = bearer_token(parts) {
            return Ok(AuthSession(token));
        }
        if let Some(token) = session_cookie(parts) {
            return Ok(AuthSession(token));
        }
        Err(AppError::unauthenticated())
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn session_cookie(parts: &Parts) -> Option<String> {
    let cookie_header = parts
        .headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    for pair in cookie_header.split(';') {
        let pair = pair.trim();
        if let Some(value) = pair.strip_prefix(SESSION_COOKIE) {
            if let Some(value) = value.strip_prefix('=') {
                let token = value.trim();
                if !token.is_empty() {
                    return Some(token.to_string());
                }
            }
        }
    }
    None
}
