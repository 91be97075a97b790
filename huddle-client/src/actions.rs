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

//! Client for the Huddle actions backend: token minting, user-id lookup,
//! profile.

use huddle_types::requests::LookupUsersRequest;
use huddle_types::responses::{LookupUsersResponse, ProfileResponse, TokenResponse};

use crate::error::ApiError;
use crate::{parse_api_response, AuthMode};

/// A typed REST client for the Huddle actions backend.
#[derive(Debug, Clone)]
pub struct ActionsClient {
    base_url: String,
    auth: AuthMode,
    http: reqwest::Client,
}

impl ActionsClient {
    /// Create a new client pointing at the actions backend base URL
    /// (e.g. `"http://localhost:8084"`).
    pub fn new(base_url: &str, auth: AuthMode) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
            http: crate::shared_http(),
        }
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.auth
            .apply(self.http.post(format!("{}{path}", self.base_url)))
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.auth
            .apply(self.http.get(format!("{}{path}", self.base_url)))
    }

    /// Mint a call access token for the authenticated user.
    ///
    /// Calls `POST /api/v1/token`. Fails with [`ApiError::Unauthenticated`]
    /// when no session is present.
    pub async fn mint_token(&self) -> Result<TokenResponse, ApiError> {
        let response = self.post("/api/v1/token").send().await?;
        parse_api_response(response).await
    }

    /// Resolve email addresses to external user ids. Addresses with no
    /// match are silently omitted from the result.
    ///
    /// Calls `POST /api/v1/users/lookup`.
    pub async fn lookup_user_ids(&self, emails: &[String]) -> Result<Vec<String>, ApiError> {
        let request = LookupUsersRequest {
            emails: emails.to_vec(),
        };
        let response = self
            .post("/api/v1/users/lookup")
            .json(&request)
            .send()
            .await?;
        let body: LookupUsersResponse = parse_api_response(response).await?;
        log::debug!(
            "resolved {} of {} invitation addresses",
            body.user_ids.len(),
            emails.len()
        );
        Ok(body.user_ids)
    }

    /// Fetch the authenticated user's profile.
    ///
    /// Calls `GET /api/v1/profile`. A 401 means there is no active session;
    /// callers typically fall back to a guest identity.
    pub async fn get_profile(&self) -> Result<ProfileResponse, ApiError> {
        let response = self.get("/api/v1/profile").send().await?;
        parse_api_response(response).await
    }
}
