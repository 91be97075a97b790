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

//! Browser-permission gate for the capture devices.

use gloo_utils::window;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{MediaStream, MediaStreamConstraints};
use yew::prelude::*;

/// Request access to both capture devices. Resolves to the granted preview
/// stream; a rejection means at least one permission is missing.
pub async fn request_permissions() -> Result<MediaStream, JsValue> {
    let navigator = window().navigator();
    let media_devices = navigator.media_devices()?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::from_bool(true));
    constraints.set_video(&JsValue::from_bool(true));

    let promise = media_devices.get_user_media_with_constraints(&constraints)?;
    let stream = JsFuture::from(promise).await?;
    Ok(stream.unchecked_into::<MediaStream>())
}

/// Shown instead of the device preview while either capture device lacks
/// browser permission. A pure gate inside the setup screen, not a separate
/// session phase.
#[function_component(PermissionPrompt)]
pub fn permission_prompt() -> Html {
    html! {
        <div class="permission-prompt card">
            <svg xmlns="http://www.w3.org/2000/svg" width="64" height="64"
                 viewBox="0 0 24 24" fill="none" stroke="currentColor"
                 stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
                <polygon points="23 7 16 12 23 17 23 7"></polygon>
                <rect x="1" y="5" width="15" height="14" rx="2" ry="2"></rect>
            </svg>
            <h2>{ "Allow camera and microphone" }</h2>
            <p class="permission-prompt-message">
                { "Please allow access to your camera and microphone to join the meeting." }
            </p>
        </div>
    }
}
