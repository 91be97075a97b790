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

//! Caller identity.
//!
//! Resolved once at session start: a profile fetch against the actions
//! backend yields an authenticated principal, and a 401 falls back to a
//! generated guest. Identities live for the browser session only and are
//! never persisted.

use huddle_client::ApiError;
use huddle_types::responses::ProfileResponse;
use huddle_types::session::SessionIdentity;

use crate::constants::actions_client;

/// Either an authenticated principal or an anonymous guest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Principal {
        /// Stable external user id.
        id: String,
        name: String,
        avatar_url: Option<String>,
    },
    Guest {
        /// Generated per-session id.
        id: String,
        name: String,
    },
}

impl Identity {
    /// Generate a fresh guest identity.
    pub fn guest() -> Self {
        let id = uuid::Uuid::new_v4().to_string();
        let short = &id[..8];
        Identity::Guest {
            name: format!("Guest-{short}"),
            id,
        }
    }

    pub fn from_profile(profile: ProfileResponse) -> Self {
        Identity::Principal {
            id: profile.id,
            name: profile.name,
            avatar_url: profile.avatar_url,
        }
    }

    pub fn user_id(&self) -> &str {
        match self {
            Identity::Principal { id, .. } | Identity::Guest { id, .. } => id,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Identity::Principal { name, .. } | Identity::Guest { name, .. } => name,
        }
    }

    pub fn is_principal(&self) -> bool {
        matches!(self, Identity::Principal { .. })
    }

    /// The identity as the session state machine sees it: guests count as
    /// absent for restricted-call membership checks.
    pub fn as_session_identity(&self) -> SessionIdentity {
        match self {
            Identity::Principal { id, .. } => SessionIdentity::Principal {
                user_id: id.clone(),
            },
            Identity::Guest { .. } => SessionIdentity::Anonymous,
        }
    }
}

/// Resolve the caller's identity. Never fails: any profile miss (no
/// session, backend unreachable, config missing) degrades to a guest.
pub async fn fetch_identity() -> Identity {
    let client = match actions_client() {
        Ok(client) => client,
        Err(e) => {
            log::error!("Config error, continuing as guest: {e}");
            return Identity::guest();
        }
    };

    match client.get_profile().await {
        Ok(profile) => Identity::from_profile(profile),
        Err(ApiError::Unauthenticated) => Identity::guest(),
        Err(e) => {
            log::warn!("Profile fetch failed, continuing as guest: {e}");
            Identity::guest()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_ids_are_unique_and_prefixed() {
        let a = Identity::guest();
        let b = Identity::guest();
        assert_ne!(a.user_id(), b.user_id());
        assert!(a.display_name().starts_with("Guest-"));
    }

    #[test]
    fn guest_is_anonymous_to_the_session() {
        assert_eq!(
            Identity::guest().as_session_identity(),
            SessionIdentity::Anonymous
        );
    }

    #[test]
    fn principal_carries_its_user_id_into_the_session() {
        let identity = Identity::from_profile(ProfileResponse {
            id: "user_1".to_string(),
            name: "Ada".to_string(),
            avatar_url: None,
        });
        assert_eq!(
            identity.as_session_identity(),
            SessionIdentity::Principal {
                user_id: "user_1".to_string()
            }
        );
        assert!(identity.is_principal());
    }
}
