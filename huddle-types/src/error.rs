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

//! API error types.
//!
//! Every failed API response is returned as `ApiResponse<ApiError>` with
//! `success: false`.

use serde::{Deserialize, Serialize};

/// Structured error returned in the `result` field of a failed
/// [`super::ApiResponse`].
///
/// The `code` field is a machine-readable identifier (e.g.
/// `"CONFIGURATION_ERROR"`). The `message` field is a human-readable
/// description suitable for display. The `engineering_error` field carries
/// debug-level detail that should be stripped or redacted in production.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiError {
    /// Machine-readable error code (e.g. `"UNAUTHENTICATED"`).
    pub code: String,

    /// Human-readable error message.
    pub message: String,

    /// Optional engineering-level detail for debugging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engineering_error: Option<String>,
}

impl ApiError {
    pub fn unauthenticated() -> Self {
        Self {
            code: "UNAUTHENTICATED".to_string(),
            message: "Authentication required.".to_string(),
            engineering_error: None,
        }
    }

    pub fn configuration(detail: &str) -> Self {
        Self {
            code: "CONFIGURATION_ERROR".to_string(),
            message: "Service is not configured.".to_string(),
            engineering_error: Some(detail.to_string()),
        }
    }

    pub fn call_not_found(call_id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("Call '{call_id}' not found"),
            engineering_error: None,
        }
    }

    pub fn forbidden() -> Self {
        Self {
            code: "FORBIDDEN".to_string(),
            message: "You are not allowed to join this meeting".to_string(),
            engineering_error: None,
        }
    }

    pub fn remote_service(detail: &str) -> Self {
        Self {
            code: "REMOTE_SERVICE_ERROR".to_string(),
            message: "An upstream service request failed.".to_string(),
            engineering_error: Some(detail.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
