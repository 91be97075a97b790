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

//! Response types for the actions backend and the video-service boundary.
//!
//! Every actions endpoint returns an [`ApiResponse<T>`] envelope:
//! - On success: `{ "success": true,  "result": <T> }`
//! - On failure: `{ "success": false, "result": <ApiError> }`

use serde::{Deserialize, Serialize};

use crate::call::CallInfo;

/// Top-level API response envelope.
///
/// All actions endpoints wrap their payload in this structure so that
/// clients always see a consistent `{ "success", "result" }` shape.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiResponse<A: Serialize> {
    pub success: bool,
    pub result: A,
}

impl<A: Serialize> ApiResponse<A> {
    /// Wrap a successful result.
    pub fn ok(result: A) -> Self {
        Self {
            success: true,
            result,
        }
    }
}

impl ApiResponse<crate::error::ApiError> {
    /// Wrap an error result.
    pub fn error(err: crate::error::ApiError) -> Self {
        Self {
            success: false,
            result: err,
        }
    }
}

/// Response payload for `POST /api/v1/token`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenResponse {
    /// Signed call access JWT.
    pub token: String,
}

/// Response payload for `POST /api/v1/users/lookup`.
///
/// Contains one id per matched address; unmatched addresses are omitted, so
/// the list may be shorter than the request. No ordering guarantee.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LookupUsersResponse {
    pub user_ids: Vec<String>,
}

/// Response payload for `GET /api/v1/profile`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProfileResponse {
    /// Stable external user id.
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Response payload for `POST /video/call/{type}/{id}` (get-or-create).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetOrCreateCallResponse {
    pub call: CallInfo,
    /// `true` when the call resource was created by this request.
    pub created: bool,
}

/// Response payload for `GET /video/call/{type}/{id}`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetCallResponse {
    pub call: CallInfo,
}

/// Response payload for `POST /video/call/{type}/{id}/join`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JoinCallResponse {
    /// Transport session handle issued by the video service.
    pub session_id: String,
}
