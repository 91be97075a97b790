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

//! Runtime configuration.
//!
//! The deployment injects a frozen `window.__APP_CONFIG` object before the
//! WASM bundle boots. Every accessor is fallible and read at first use; a
//! missing or malformed config surfaces to the action that needed it, not
//! at startup.

use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

use huddle_client::{ActionsClient, AuthMode, VideoServiceClient};

#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    /// Base URL of the actions backend.
    #[serde(rename = "apiBaseUrl")]
    pub api_base_url: String,
    /// Base URL of the external video service.
    #[serde(rename = "videoApiBaseUrl")]
    pub video_api_base_url: String,
    /// Public API key of the external video service.
    #[serde(rename = "videoApiKey")]
    pub video_api_key: String,
    /// Base URL of this deployment, used for invitation links.
    #[serde(rename = "siteBaseUrl")]
    pub site_base_url: String,
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = window().ok_or_else(|| "no window".to_string())?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

pub fn site_base_url() -> Result<String, String> {
    app_config().map(|c| c.site_base_url)
}

/// Client for the actions backend. Browser cookies carry the session.
pub fn actions_client() -> Result<ActionsClient, String> {
    let config = app_config()?;
    Ok(ActionsClient::new(&config.api_base_url, AuthMode::Cookie))
}

/// Client for the external video service with the given credentials.
pub fn video_service_client(auth: AuthMode) -> Result<VideoServiceClient, String> {
    let config = app_config()?;
    Ok(VideoServiceClient::new(
        &config.video_api_base_url,
        &config.video_api_key,
        auth,
    ))
}
