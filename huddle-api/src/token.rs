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

//! Call access token (JWT) generation.
//!
//! Tokens are signed with the video-service API secret and presented by the
//! browser when connecting to the video service. The validity window is one
//! hour; `iat` is backdated by sixty seconds so a verifier with a slightly
//! slow clock still accepts a freshly minted token.

use chrono::Utc;
use huddle_types::CallAccessTokenClaims;
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::error::AppError;

/// Sign a call access token for the given user id.
pub fn generate_call_token(secret: &str, user_id: &str) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let claims = CallAccessTokenClaims {
        sub: user_id.to_string(),
        iat: now - CallAccessTokenClaims::ISSUED_AT_SKEW_SECS,
        exp: now + CallAccessTokenClaims::TOKEN_TTL_SECS,
        iss: CallAccessTokenClaims::ISSUER.to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        tracing::error!("Failed to sign JWT: {e}");
        AppError::remote_service("failed to generate call token")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    const TEST_SECRET: &str = "super-secret-test-key";

    fn decode_claims(token: &str) -> CallAccessTokenClaims {
        let mut validation = Validation::default();
        validation.set_issuer(&[CallAccessTokenClaims::ISSUER]);
        decode::<CallAccessTokenClaims>(
            token,
            &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
            &validation,
        )
        .expect("should decode")
        .claims
    }

    #[test]
    fn token_round_trips_with_correct_claims() {
        let token = generate_call_token(TEST_SECRET, "user_42").expect("should sign");
        let claims = decode_claims(&token);
        assert_eq!(claims.sub, "user_42");
        assert_eq!(claims.iss, "huddle-web");
    }

    #[test]
    fn exp_is_one_hour_after_issuance() {
        let before = Utc::now().timestamp();
        let token = generate_call_token(TEST_SECRET, "user_42").expect("should sign");
        let after = Utc::now().timestamp();

        let claims = decode_claims(&token);
        assert!(claims.exp >= before + CallAccessTokenClaims::TOKEN_TTL_SECS);
        assert!(claims.exp <= after + CallAccessTokenClaims::TOKEN_TTL_SECS);
    }

    #[test]
    fn iat_is_backdated_sixty_seconds() {
        let before = Utc::now().timestamp();
        let token = generate_call_token(TEST_SECRET, "user_42").expect("should sign");
        let after = Utc::now().timestamp();

        let claims = decode_claims(&token);
        assert!(claims.iat >= before - CallAccessTokenClaims::ISSUED_AT_SKEW_SECS);
        assert!(claims.iat <= after - CallAccessTokenClaims::ISSUED_AT_SKEW_SECS);
        // The skew plus the TTL spans the whole validity window.
        assert_eq!(
            claims.exp - claims.iat,
            CallAccessTokenClaims::TOKEN_TTL_SECS + CallAccessTokenClaims::ISSUED_AT_SKEW_SECS
        );
    }

    #[test]
    fn wrong_secret_fails_validation() {
        let token = generate_call_token(TEST_SECRET, "user_42").expect("should sign");
        let mut validation = Validation::default();
        validation.set_issuer(&[CallAccessTokenClaims::ISSUER]);
        let result = decode::<CallAccessTokenClaims>(
            &token,
            &DecodingKey::from_secret(b"a-different-secret"),
            &validation,
        );
        assert!(result.is_err());
    }
}
