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

//! Request types for the actions backend and the video-service boundary.
//!
//! Used by both the server (deserialization) and clients (serialization).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::call::{CallCustom, CallMember};

/// Request body for `POST /video/call/{type}/{id}` (get-or-create).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetOrCreateCallRequest {
    pub data: CallData,
}

/// Creation payload for a call resource.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CallData {
    /// Scheduled start. `None` means the call starts immediately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub members: Vec<CallMember>,

    #[serde(default)]
    pub custom: CallCustom,
}

/// Request body for `POST /api/v1/users/lookup`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LookupUsersRequest {
    /// Email addresses to resolve. Unmatched addresses are silently omitted
    /// from the response.
    pub emails: Vec<String>,
}
