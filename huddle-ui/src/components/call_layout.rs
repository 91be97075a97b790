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

//! In-call layout.
//!
//! The media grid itself is rendered by the video service's transport
//! layer; this component hosts it and owns the local controls (mic/camera
//! toggles, leave).

use yew::prelude::*;

use crate::devices::DeviceController;

#[derive(Properties, PartialEq)]
pub struct CallLayoutProps {
    pub devices: DeviceController,
    pub on_leave: Callback<()>,
}

pub enum CallLayoutMsg {
    ToggleMicrophone,
    ToggleCamera,
}

pub struct CallLayout {
    mic_enabled: bool,
    camera_enabled: bool,
}

impl Component for CallLayout {
    type Message = CallLayoutMsg;
    type Properties = CallLayoutProps;

    fn create(ctx: &Context<Self>) -> Self {
        let devices = &ctx.props().devices;
        Self {
            mic_enabled: devices.microphone_enabled(),
            camera_enabled: devices.camera_enabled(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let devices = &ctx.props().devices;
        match msg {
            CallLayoutMsg::ToggleMicrophone => {
                self.mic_enabled = devices.toggle_microphone();
                true
            }
            CallLayoutMsg::ToggleCamera => {
                self.camera_enabled = devices.toggle_camera();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="call-layout">
                <div id="call-stage" class="call-stage"></div>
                <nav class="call-controls">
                    <button class={classes!("btn", (!self.mic_enabled).then_some("btn-off"))}
                            onclick={ctx.link().callback(|_| CallLayoutMsg::ToggleMicrophone)}>
                        { if self.mic_enabled { "Mute" } else { "Unmute" } }
                    </button>
                    <button class={classes!("btn", (!self.camera_enabled).then_some("btn-off"))}
                            onclick={ctx.link().callback(|_| CallLayoutMsg::ToggleCamera)}>
                        { if self.camera_enabled { "Stop Video" } else { "Start Video" } }
                    </button>
                    <button class="btn btn-danger"
                            onclick={ctx.props().on_leave.reform(|_| ())}>
                        { "Leave" }
                    </button>
                </nav>
            </div>
        }
    }
}
