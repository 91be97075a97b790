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

//! Handlers for identity-resolution endpoints.

use axum::{extract::State, Json};
use huddle_types::requests::LookupUsersRequest;
use huddle_types::responses::{LookupUsersResponse, ProfileResponse};
use huddle_types::ApiResponse;

use crate::auth::AuthSession;
use crate::config::Config;
use crate::error::AppError;
use crate::identity::{lookup_user_ids, resolve_principal};
use crate::state::AppState;

/// POST /api/v1/users/lookup
///
/// Resolve invitation email addresses to external user ids. Unmatched
/// addresses are omitted; the result may be shorter than the request and
/// carries no ordering guarantee.
pub async fn lookup_users(
    State(state): State<AppState>,
    AuthSession(session_token): AuthSession,
    Json(body): Json<LookupUsersRequest>,
) -> Result<Json<ApiResponse<LookupUsersResponse>>, AppError> {
    let config = Config::from_env().map_err(|e| AppError::configuration(&e))?;
    // Only signed-in users create restricted meetings.
    resolve_principal(&state.http, &config.identity, &session_token).await?;

    let user_ids = lookup_user_ids(&state.http, &config.identity, &body.emails).await?;
    Ok(Json(ApiResponse::ok(LookupUsersResponse { user_ids })))
}

/// GET /api/v1/profile
///
/// Resolve the current session to a principal. The front-end calls this at
/// startup; a 401 makes it fall back to a guest identity.
pub async fn get_profile(
    State(state): State<AppState>,
    AuthSession(session_token): AuthSession,
) -> Result<Json<ApiResponse<ProfileResponse>>, AppError> {
    let config = Config::from_env().map_err(|e| AppError::configuration(&e))?;
    let principal = resolve_principal(&state.http, &config.identity, &session_token).await?;
    Ok(Json(ApiResponse::ok(principal)))
}
