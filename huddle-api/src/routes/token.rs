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

//! Handler for the token-minting endpoint.

use axum::{extract::State, Json};
use huddle_types::responses::TokenResponse;
use huddle_types::ApiResponse;

use crate::auth::AuthSession;
use crate::config::Config;
use crate::error::AppError;
use crate::identity::resolve_principal;
use crate::state::AppState;
use crate::token::generate_call_token;

/// POST /api/v1/token
///
/// Mint a call access token for the caller. The session must resolve to a
/// principal; guests never hit this endpoint (they join open calls
/// anonymously).
pub async fn mint_token(
    State(state): State<AppState>,
    AuthSession(session_token): AuthSession,
) -> Result<Json<ApiResponse<TokenResponse>>, AppError> {
    let config = Config::from_env().map_err(|e| AppError::configuration(&e))?;
    let principal = resolve_principal(&state.http, &config.identity, &session_token).await?;

    let token = generate_call_token(&config.video_api_secret, &principal.id)?;
    tracing::debug!(user_id = %principal.id, "minted call access token");

    Ok(Json(ApiResponse::ok(TokenResponse { token })))
}
