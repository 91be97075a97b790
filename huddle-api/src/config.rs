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

//! Application configuration loaded from environment variables.
//!
//! Handlers load the configuration when an action first needs it, so a
//! missing value surfaces as `CONFIGURATION_ERROR` to the caller of that
//! action only — the process does not refuse to start.

use std::env;

/// Configuration for the actions backend.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public API key of the external video service.
    pub video_api_key: String,
    /// Signing secret of the external video service (HMAC-SHA256).
    pub video_api_secret: String,
    /// Base URL of this deployment, used to build invitation links.
    pub site_base_url: String,
    /// Identity provider configuration.
    pub identity: IdentityConfig,
}

/// Identity provider (auth SaaS) configuration.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Base URL of the identity provider API.
    pub api_url: String,
    /// Server-side API key for session verification and directory lookups.
    pub api_key: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Required
    /// - `VIDEO_API_KEY`
    /// - `VIDEO_API_SECRET`
    /// - `SITE_BASE_URL`
    /// - `IDENTITY_API_URL`
    /// - `IDENTITY_API_KEY`
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            video_api_key: require("VIDEO_API_KEY")?,
            video_api_secret: require("VIDEO_API_SECRET")?,
            site_base_url: require("SITE_BASE_URL")?,
            identity: IdentityConfig {
                api_url: require("IDENTITY_API_URL")?,
                api_key: require("IDENTITY_API_KEY")?,
            },
        })
    }
}

/// Address the HTTP server binds to. Read once at startup; this is the one
/// value that cannot wait for first use.
pub fn listen_addr() -> String {
    env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8084".to_string())
}

fn require(name: &str) -> Result<String, String> {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| format!("{name} environment variable is required"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: [&str; 5] = [
        "VIDEO_API_KEY",
        "VIDEO_API_SECRET",
        "SITE_BASE_URL",
        "IDENTITY_API_URL",
        "IDENTITY_API_KEY",
    ];

    fn set_all() {
        env::set_var("VIDEO_API_KEY", "key_test");
        env::set_var("VIDEO_API_SECRET", "secret_test");
        env::set_var("SITE_BASE_URL", "https://huddle.test");
        env::set_var("IDENTITY_API_URL", "https://id.test");
        env::set_var("IDENTITY_API_KEY", "idk_test");
    }

    fn clear_all() {
        for var in ALL_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn loads_when_all_vars_present() {
        set_all();
        let config = Config::from_env().expect("should load");
        assert_eq!(config.video_api_key, "key_test");
        assert_eq!(config.site_base_url, "https://huddle.test");
        assert_eq!(config.identity.api_url, "https://id.test");
        clear_all();
    }

    #[test]
    #[serial]
    fn missing_secret_is_an_error_naming_the_variable() {
        set_all();
        env::remove_var("VIDEO_API_SECRET");
        let err = Config::from_env().unwrap_err();
        assert!(err.contains("VIDEO_API_SECRET"));
        clear_all();
    }

    #[test]
    #[serial]
    fn empty_value_counts_as_missing() {
        set_all();
        env::set_var("SITE_BASE_URL", "");
        let err = Config::from_env().unwrap_err();
        assert!(err.contains("SITE_BASE_URL"));
        clear_all();
    }

    #[test]
    #[serial]
    fn listen_addr_defaults_when_unset() {
        env::remove_var("LISTEN_ADDR");
        assert_eq!(listen_addr(), "0.0.0.0:8084");
    }
}
