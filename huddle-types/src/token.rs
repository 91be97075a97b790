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

//! Call access token (JWT) claims.
//!
//! The call access token is a signed JWT (HMAC-SHA256) that authorizes a
//! client to connect to the external video service as a given user. The
//! actions backend signs the token with the video-service API secret; the
//! video service validates the signature.

use serde::{Deserialize, Serialize};

/// JWT payload for a call access token.
///
/// # Example payload
///
/// ```json
/// {
///   "sub": "user_2xKq",
///   "iat": 1707004740,
///   "exp": 1707008400,
///   "iss": "huddle-web"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CallAccessTokenClaims {
    /// The external user id the token authorizes.
    pub sub: String,

    /// Issued-at timestamp (Unix seconds), backdated by
    /// [`Self::ISSUED_AT_SKEW_SECS`] to tolerate clock drift between the
    /// client and the verifier.
    pub iat: i64,

    /// Expiration timestamp (Unix seconds). Token is rejected after this.
    pub exp: i64,

    /// Issuer identifier. Always `"huddle-web"`.
    pub iss: String,
}

impl CallAccessTokenClaims {
    /// The expected issuer value for tokens produced by the actions backend.
    pub const ISSUER: &'static str = "huddle-web";

    /// Validity window: one hour.
    pub const TOKEN_TTL_SECS: i64 = 3600;

    /// Negative clock-skew allowance applied to `iat`.
    pub const ISSUED_AT_SKEW_SECS: i64 = 60;
}
