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

//! Device setup screen.
//!
//! Requests capture permissions on mount, shows the camera preview once
//! granted, and exposes the "join with mic and camera off" toggle. The
//! toggle drives both devices together and is re-applied on every change,
//! including the first mount, so the devices always match the checkbox.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlVideoElement};
use yew::prelude::*;

use crate::components::loading::Spinner;
use crate::components::permission_prompt::{request_permissions, PermissionPrompt};
use crate::devices::DeviceController;

#[derive(Properties, PartialEq)]
pub struct SetupScreenProps {
    pub devices: DeviceController,
    /// Emitted when the user presses Join. The parent issues the join
    /// request and flips its setup-complete flag.
    pub on_join: Callback<()>,
}

#[function_component(SetupScreen)]
pub fn setup_screen(props: &SetupScreenProps) -> Html {
    // None = permission request in flight.
    let permission_granted = use_state(|| None as Option<bool>);
    let join_muted = use_state(|| false);
    let preview_ref = use_node_ref();

    // Request permissions once; release the preview when the screen
    // unmounts. A grant arriving after unmount is dropped.
    {
        let permission_granted = permission_granted.clone();
        let devices = props.devices.clone();
        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));
            {
                let alive = alive.clone();
                let devices = devices.clone();
                spawn_local(async move {
                    let result = request_permissions().await;
                    if !alive.get() {
                        return;
                    }
                    match result {
                        Ok(stream) => {
                            devices.set_preview(Some(stream));
                            permission_granted.set(Some(true));
                        }
                        Err(e) => {
                            log::warn!("Capture permissions denied: {e:?}");
                            permission_granted.set(Some(false));
                        }
                    }
                });
            }
            move || {
                alive.set(false);
                devices.release();
            }
        });
    }

    // Apply the join-muted toggle to both devices, first mount included.
    {
        let devices = props.devices.clone();
        use_effect_with(*join_muted, move |muted| {
            devices.set_all_enabled(!muted);
            || ()
        });
    }

    // Attach the preview stream once the video element exists.
    {
        let devices = props.devices.clone();
        let preview_ref = preview_ref.clone();
        use_effect_with(*permission_granted, move |granted| {
            if *granted == Some(true) {
                if let Some(video) = preview_ref.cast::<HtmlVideoElement>() {
                    video.set_src_object(devices.preview().as_ref());
                }
            }
            || ()
        });
    }

    let on_muted_change = {
        let join_muted = join_muted.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            join_muted.set(input.checked());
        })
    };

    match *permission_granted {
        None => html! { <Spinner /> },
        Some(false) => html! { <PermissionPrompt /> },
        Some(true) => html! {
            <div class="setup-screen">
                <h1>{ "Setup" }</h1>
                <video ref={preview_ref} class="setup-preview" autoplay=true muted=true playsinline=true />
                <label class="setup-muted-toggle">
                    <input
                        type="checkbox"
                        checked={*join_muted}
                        onchange={on_muted_change}
                    />
                    { "Join with mic and camera off" }
                </label>
                <button class="btn btn-primary" onclick={props.on_join.reform(|_| ())}>
                    { "Join Meeting" }
                </button>
            </div>
        },
    }
}
