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

//! Application error type that implements Axum's `IntoResponse`.
//!
//! Every error is returned as `ApiResponse<ApiError>` with `success: false`,
//! paired with the appropriate HTTP status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use huddle_types::{ApiError, ApiResponse};

/// Application-level error that pairs an HTTP status code with an
/// [`ApiError`].
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub body: ApiError,
}

impl AppError {
    pub fn new(status: StatusCode, body: ApiError) -> Self {
        Self { status, body }
    }

    pub fn unauthenticated() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, ApiError::unauthenticated())
    }

    pub fn configuration(detail: &str) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::configuration(detail),
        )
    }

    pub fn remote_service(detail: &str) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, ApiError::remote_service(detail))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ApiResponse::error(self.body);
        (self.status, Json(body)).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Identity provider request failed: {err}");
        Self::remote_service(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http_body_util::BodyExt;

    /// Consume the response body and deserialize it to
    /// `ApiResponse<ApiError>`.
    async fn read_error_body(resp: Response) -> (StatusCode, ApiResponse<ApiError>) {
        let status = resp.status();
        let bytes = Body::new(resp.into_body())
            .collect()
            .await
            .expect("collect body")
            .to_bytes();
        let parsed: ApiResponse<ApiError> =
            serde_json::from_slice(&bytes).expect("deserialize error body");
        (status, parsed)
    }

    #[tokio::test]
    async fn unauthenticated_produces_401_with_correct_code() {
        let resp = AppError::unauthenticated().into_response();
        let (status, body) = read_error_body(resp).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(!body.success);
        assert_eq!(body.result.code, "UNAUTHENTICATED");
    }

    #[tokio::test]
    async fn configuration_produces_500_and_carries_detail() {
        let resp = AppError::configuration("VIDEO_API_SECRET missing").into_response();
        let (status, body) = read_error_body(resp).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.result.code, "CONFIGURATION_ERROR");
        assert_eq!(
            body.result.engineering_error.as_deref(),
            Some("VIDEO_API_SECRET missing")
        );
    }

    #[tokio::test]
    async fn remote_service_produces_502() {
        let resp = AppError::remote_service("directory timed out").into_response();
        let (status, body) = read_error_body(resp).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.result.code, "REMOTE_SERVICE_ERROR");
    }
}
