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

//! Cross-platform REST client for the Huddle actions backend and the
//! external video service.
//!
//! Works on WASM (browser) and native targets via [`reqwest`].
//!
//! # Example
//!
//! ```no_run
//! use huddle_client::{ActionsClient, AuthMode, VideoServiceClient};
//!
//! # async fn example() -> Result<(), huddle_client::ApiError> {
//! // Browser: the identity provider's session cookie is sent automatically.
//! let actions = ActionsClient::new("http://localhost:8084", AuthMode::Cookie);
//! let token = actions.mint_token().await?;
//!
//! // The video service authenticates calls with the public API key plus,
//! // for signed-in users, the minted call access token.
//! let video = VideoServiceClient::new(
//!     "https://video.example.com",
//!     "key_abc123",
//!     AuthMode::Bearer(token.token),
//! );
//! use huddle_client::huddle_types::CallType;
//! let call = video.get_call(CallType::Open, "my-call").await?;
//! println!("call ends at {:?}", call.call.ended_at);
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod calls;
pub mod error;

pub use actions::ActionsClient;
pub use calls::VideoServiceClient;
pub use error::ApiError;
pub use huddle_types;

use reqwest::Client;

/// How a client authenticates its requests.
#[derive(Debug, Clone)]
pub enum AuthMode {
    /// Browser mode: send credentials (cookies) automatically via `fetch`.
    /// Used by the Yew front-end when talking to the actions backend.
    Cookie,
    /// Attach `Authorization: Bearer <token>` to every request. Used for
    /// video-service calls made on behalf of a signed-in user.
    Bearer(String),
    /// No credentials. Used for guest access to open calls.
    Anonymous,
}

impl AuthMode {
    fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            AuthMode::Cookie => {
                #[cfg(target_arch = "wasm32")]
                {
                    builder.fetch_credentials_include()
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    builder
                }
            }
            AuthMode::Bearer(token) => {
                builder.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"))
            }
            AuthMode::Anonymous => builder,
        }
    }
}

pub(crate) fn shared_http() -> Client {
    Client::new()
}

/// Parse a standard `ApiResponse<T>` body, returning `T` on success or
/// mapping the error to [`ApiError`].
pub(crate) async fn parse_api_response<T: serde::de::DeserializeOwned + serde::Serialize>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status().as_u16();
    match status {
        200 | 201 => {
            let wrapper: huddle_types::ApiResponse<T> = response.json().await?;
            Ok(wrapper.result)
        }
        401 => Err(ApiError::Unauthenticated),
        403 => {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Forbidden(body))
        }
        404 => {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::NotFound(body))
        }
        _ => {
            let body = response.text().await.unwrap_or_default();
            if body.contains("CONFIGURATION_ERROR") {
                Err(ApiError::Configuration(body))
            } else {
                Err(ApiError::RemoteService { status, body })
            }
        }
    }
}
