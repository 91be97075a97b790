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

//! Shared test helpers for huddle-api integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{self, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use huddle_api::{routes, state::AppState};
use huddle_types::{ApiError, ApiResponse};

/// Build the Axum router, ready for `tower::ServiceExt::oneshot`.
pub fn build_app() -> Router {
    routes::router().with_state(AppState::new())
}

/// Build a request with an optional bearer session token.
pub fn request(method: &str, uri: &str, session: Option<&str>, body: Body) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json");
    if let Some(token) = session {
        builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(body).expect("build request")
}

/// Consume the response body and deserialize it to `ApiResponse<ApiError>`.
pub async fn read_error_body(resp: Response) -> (http::StatusCode, ApiResponse<ApiError>) {
    let status = resp.status();
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    let parsed: ApiResponse<ApiError> =
        serde_json::from_slice(&bytes).expect("deserialize error body");
    (status, parsed)
}

/// Remove every configuration variable so a test starts from a clean env.
pub fn clear_config_env() {
    for var in [
        "VIDEO_API_KEY",
        "VIDEO_API_SECRET",
        "SITE_BASE_URL",
        "IDENTITY_API_URL",
        "IDENTITY_API_KEY",
    ] {
        std::env::remove_var(var);
    }
}
