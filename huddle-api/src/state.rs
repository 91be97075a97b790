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

//! Shared application state passed to every Axum handler via `State`.
//!
//! Secrets are deliberately absent: handlers load [`crate::config::Config`]
//! at first use so missing values surface per action, not at startup.

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Outbound HTTP client, reused across requests.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
