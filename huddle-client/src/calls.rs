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

//! Call endpoints of the external video service: get-or-create, get, join.

use huddle_types::requests::{CallData, GetOrCreateCallRequest};
use huddle_types::responses::{GetCallResponse, GetOrCreateCallResponse, JoinCallResponse};
use huddle_types::CallType;

use crate::error::ApiError;
use crate::{parse_api_response, AuthMode};

/// A typed REST client for the external video service.
///
/// Every request carries the public API key as a query parameter; signed-in
/// users additionally present a bearer call access token via [`AuthMode`].
#[derive(Debug, Clone)]
pub struct VideoServiceClient {
    base_url: String,
    api_key: String,
    auth: AuthMode,
    http: reqwest::Client,
}

impl VideoServiceClient {
    pub fn new(base_url: &str, api_key: &str, auth: AuthMode) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            auth,
            http: crate::shared_http(),
        }
    }

    /// Swap in a fresh call access token (e.g. from the token provider).
    pub fn set_bearer_token(&mut self, token: String) {
        self.auth = AuthMode::Bearer(token);
    }

    fn call_url(&self, call_type: CallType, call_id: &str) -> String {
        format!("{}/video/call/{}/{call_id}", self.base_url, call_type)
    }

    fn with_key(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        self.auth
            .apply(builder.query(&[("api_key", self.api_key.as_str())]))
    }

    /// Create the call if it does not exist, otherwise return it unchanged.
    ///
    /// Calls `POST /video/call/{type}/{id}`.
    pub async fn get_or_create_call(
        &self,
        call_type: CallType,
        call_id: &str,
        data: CallData,
    ) -> Result<GetOrCreateCallResponse, ApiError> {
        let request = GetOrCreateCallRequest { data };
        let response = self
            .with_key(self.http.post(self.call_url(call_type, call_id)))
            .json(&request)
            .send()
            .await?;
        parse_api_response(response).await
    }

    /// Fetch a call's current state.
    ///
    /// Calls `GET /video/call/{type}/{id}`. A missing call surfaces as
    /// [`ApiError::NotFound`]; callers map it to the not-found screen
    /// rather than treating it as a failure.
    pub async fn get_call(
        &self,
        call_type: CallType,
        call_id: &str,
    ) -> Result<GetCallResponse, ApiError> {
        let response = self
            .with_key(self.http.get(self.call_url(call_type, call_id)))
            .send()
            .await?;
        parse_api_response(response).await
    }

    /// Look a call up by id alone, across call types.
    ///
    /// Calls `GET /video/calls/{id}`. The meeting route only carries the
    /// call id; the service resolves the type. Returns `Ok(None)` when no
    /// call exists for the id.
    pub async fn find_call(&self, call_id: &str) -> Result<Option<GetCallResponse>, ApiError> {
        let url = format!("{}/video/calls/{call_id}", self.base_url);
        let response = self.with_key(self.http.get(url)).send().await?;
        match parse_api_response(response).await {
            Ok(found) => Ok(Some(found)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Ask the video service to join the call.
    ///
    /// Calls `POST /video/call/{type}/{id}/join`. The request only issues
    /// the join; the resulting connection state is pushed by the transport
    /// layer, not returned here.
    pub async fn join_call(
        &self,
        call_type: CallType,
        call_id: &str,
    ) -> Result<JoinCallResponse, ApiError> {
        let url = format!("{}/join", self.call_url(call_type, call_id));
        let response = self.with_key(self.http.post(url)).send().await?;
        parse_api_response(response).await
    }
}
