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

//! Error types for the REST clients.

use thiserror::Error;

/// Errors returned by [`ActionsClient`](crate::ActionsClient) and
/// [`VideoServiceClient`](crate::VideoServiceClient) methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No identity where one is required (HTTP 401). Not retried; the
    /// caller must re-authenticate.
    #[error("Not authenticated. Please sign in.")]
    Unauthenticated,

    /// The server denied access (HTTP 403).
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// The requested resource was not found (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backend is missing a required secret or key.
    #[error("Service is not configured: {0}")]
    Configuration(String),

    /// A downstream creation/join/lookup failed.
    #[error("Server error ({status}): {body}")]
    RemoteService { status: u16, body: String },

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// Whether the 404 family applies: the resource genuinely does not
    /// exist, as opposed to a transport failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}
