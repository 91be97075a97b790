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

//! Meeting page.
//!
//! `MeetingSession` owns the inputs of the session view-state machine and
//! re-derives the phase on every message. Each async action sets exactly
//! one piece of state on completion: the call fetch resolves the call
//! lookup, the join request drives the connection state. Messages arriving
//! after the component is gone are dropped by the framework.

use chrono::Utc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use huddle_types::session::{CallLookup, ConnectionState, SessionView};
use huddle_types::{CallInfo, SessionPhase};

use crate::components::call_layout::CallLayout;
use crate::components::loading::Spinner;
use crate::components::meeting_ended_overlay::MeetingEndedOverlay;
use crate::components::setup::SetupScreen;
use crate::components::upcoming_meeting::UpcomingMeeting;
use crate::context::VideoSessionCtx;
use crate::devices::DeviceController;
use crate::provider::VideoSession;
use crate::routing::Route;
use crate::time::format_locale;

#[derive(Properties, PartialEq, Clone)]
pub struct MeetingPageProps {
    pub id: String,
}

/// Thin wrapper that pulls the session context (guaranteed present below
/// the client provider) and hands it to the stateful component.
#[function_component(MeetingPage)]
pub fn meeting_page(props: &MeetingPageProps) -> Html {
    let session = use_context::<VideoSessionCtx>()
        .expect("Video session provider is missing – this is a bug");

    html! { <MeetingSession id={props.id.clone()} session={session} /> }
}

#[derive(Properties, PartialEq)]
pub struct MeetingSessionProps {
    pub id: String,
    pub session: VideoSession,
}

pub enum Msg {
    FetchCall,
    CallResolved(Option<CallInfo>),
    CallLoadFailed(String),
    Join,
    JoinCompleted(Result<(), String>),
    Leave,
}

pub struct MeetingSession {
    view: SessionView,
    devices: DeviceController,
    error: Option<String>,
}

impl Component for MeetingSession {
    type Message = Msg;
    type Properties = MeetingSessionProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::FetchCall);

        let mut view = SessionView::new();
        view.identity = ctx.props().session.identity.as_session_identity();
        Self {
            view,
            devices: DeviceController::new(),
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FetchCall => {
                let session = ctx.props().session.clone();
                let id = ctx.props().id.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match session.client.find_call(&id).await {
                        Ok(found) => {
                            link.send_message(Msg::CallResolved(found.map(|r| r.call)))
                        }
                        Err(e) => link.send_message(Msg::CallLoadFailed(e.to_string())),
                    }
                });
                false
            }
            Msg::CallResolved(Some(call)) => {
                self.view.call = CallLookup::Found(call);
                true
            }
            Msg::CallResolved(None) => {
                self.view.call = CallLookup::Missing;
                true
            }
            Msg::CallLoadFailed(e) => {
                log::error!("Call lookup failed: {e}");
                self.error = Some("Something went wrong. Please reload the page.".to_string());
                true
            }
            Msg::Join => {
                let call = match &self.view.call {
                    CallLookup::Found(call) => call.clone(),
                    _ => return false,
                };
                // Issue the join request to the transport layer first...
                let session = ctx.props().session.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = session.client.join_call(call.call_type, &call.id).await;
                    link.send_message(Msg::JoinCompleted(
                        result.map(|_| ()).map_err(|e| e.to_string()),
                    ));
                });
                // ...and only then flip the local setup flag, so the UI
                // never claims a join that was not requested. Completion is
                // observed through the connection state, not here.
                self.view.connection = ConnectionState::Connecting;
                self.view.setup_complete = true;
                true
            }
            Msg::JoinCompleted(Ok(())) => {
                self.view.connection = ConnectionState::Connected;
                true
            }
            Msg::JoinCompleted(Err(e)) => {
                log::error!("Join failed: {e}");
                self.view.connection = ConnectionState::Disconnected;
                self.error = Some("Something went wrong. Please try again.".to_string());
                true
            }
            Msg::Leave => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::MeetingLeft {
                        id: ctx.props().id.clone(),
                    });
                }
                false
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.devices.release();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if let Some(message) = &self.error {
            return html! {
                <div class="notice notice-error">
                    <p>{ message }</p>
                </div>
            };
        }

        let description = match &self.view.call {
            CallLookup::Found(call) => call.custom.description.clone(),
            _ => None,
        };
        let description_html = match &description {
            Some(text) => html! {
                <p class="meeting-description">
                    { "Meeting description: " }
                    <span>{ text }</span>
                </p>
            },
            None => html! {},
        };

        match self.view.phase(Utc::now()) {
            SessionPhase::Loading => html! { <Spinner /> },
            SessionPhase::NotFound => html! {
                <p class="meeting-terminal">{ "Call not found" }</p>
            },
            SessionPhase::Forbidden => html! {
                <p class="meeting-terminal">{ "You are not allowed to join this meeting" }</p>
            },
            SessionPhase::Ended => html! {
                <MeetingEndedOverlay message={"This meeting has ended.".to_string()} />
            },
            SessionPhase::UpcomingScheduled => {
                let starts_at = match &self.view.call {
                    CallLookup::Found(call) => call.starts_at.map(format_locale),
                    _ => None,
                };
                html! {
                    <UpcomingMeeting
                        starts_at={starts_at.unwrap_or_default()}
                        description={description} />
                }
            }
            SessionPhase::Setup => html! {
                <>
                    { description_html }
                    <SetupScreen
                        devices={self.devices.clone()}
                        on_join={ctx.link().callback(|_| Msg::Join)} />
                </>
            },
            SessionPhase::ConnectingToCall => html! { <Spinner /> },
            SessionPhase::InCall => html! {
                <>
                    { description_html }
                    <CallLayout
                        devices={self.devices.clone()}
                        on_leave={ctx.link().callback(|_| Msg::Leave)} />
                </>
            },
        }
    }
}
