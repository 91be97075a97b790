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

//! Outbound calls to the identity provider.
//!
//! Two operations are consumed: resolving a session token to the current
//! principal, and listing principals matching a set of email addresses.
//! Both are thin `reqwest` wrappers; the response mapping is kept in pure
//! functions so it can be unit-tested without a live provider.

use serde::{Deserialize, Serialize};

use huddle_types::responses::ProfileResponse;

use crate::config::IdentityConfig;
use crate::error::AppError;

/// A user record as returned by the identity provider's directory API.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DirectoryUser {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Directory query response: only matched addresses produce entries.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DirectoryQueryResponse {
    #[serde(default)]
    pub data: Vec<DirectoryUser>,
}

#[derive(Debug, Serialize)]
struct DirectoryQueryRequest<'a> {
    email_addresses: &'a [String],
}

#[derive(Debug, Serialize)]
struct VerifySessionRequest<'a> {
    session_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct VerifySessionResponse {
    user: DirectoryUser,
}

/// Exchange a session token for the authenticated principal.
///
/// A 401/404 from the provider means the session is gone; the caller sees
/// `UNAUTHENTICATED` and must sign in again. No retry.
pub async fn resolve_principal(
    http: &reqwest::Client,
    identity: &IdentityConfig,
    session_token: &str,
) -> Result<ProfileResponse, AppError> {
    let url = format!("{}/v1/sessions/verify", identity.api_url);
    let response = http
        .post(url)
        .bearer_auth(&identity.api_key)
        .json(&VerifySessionRequest { session_token })
        .send()
        .await?;

    match response.status().as_u16() {
        200 => {
            let body: VerifySessionResponse = response.json().await?;
            Ok(principal_from_user(body.user))
        }
        401 | 404 => Err(AppError::unauthenticated()),
        status => {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Session verification failed ({status}): {body}");
            Err(AppError::remote_service(&format!(
                "session verification returned {status}"
            )))
        }
    }
}

/// Resolve email addresses to external user ids.
///
/// The provider returns entries for matched addresses only, so unmatched
/// addresses are silently omitted — a partial match is not an error.
pub async fn lookup_user_ids(
    http: &reqwest::Client,
    identity: &IdentityConfig,
    emails: &[String],
) -> Result<Vec<String>, AppError> {
    let url = format!("{}/v1/users/query", identity.api_url);
    let response = http
        .post(url)
        .bearer_auth(&identity.api_key)
        .json(&DirectoryQueryRequest {
            email_addresses: emails,
        })
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        tracing::error!("Directory query failed ({status}): {body}");
        return Err(AppError::remote_service(&format!(
            "directory query returned {status}"
        )));
    }

    let body: DirectoryQueryResponse = response.json().await?;
    Ok(matched_ids(body))
}

/// Extract the user ids from a directory query response.
pub fn matched_ids(response: DirectoryQueryResponse) -> Vec<String> {
    response.data.into_iter().map(|user| user.id).collect()
}

/// Shape a directory user into the profile the front-end consumes. Users
/// without a display name fall back to their id.
pub fn principal_from_user(user: DirectoryUser) -> ProfileResponse {
    let name = user
        .display_name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| user.id.clone());
    ProfileResponse {
        id: user.id,
        name,
        avatar_url: user.avatar_url,
    }
}
