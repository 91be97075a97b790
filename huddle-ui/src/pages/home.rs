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

//! Create-meeting page.
//!
//! Collects an optional description, an optional scheduled start, and the
//! participant policy, then creates exactly one call resource and shows the
//! invitation panel. Scheduled times before "now" are excluded by the
//! `min` bound on the input, not by the service.

use chrono::Utc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use huddle_types::call::{assemble_members, CallCustom};
use huddle_types::requests::CallData;
use huddle_types::CallType;

use crate::components::meeting_link::MeetingLinkView;
use crate::constants::{actions_client, site_base_url};
use crate::context::VideoSessionCtx;
use crate::link::invitation_link;
use crate::provider::VideoSession;
use crate::time::{datetime_local_now, format_locale, parse_datetime_local};

const MAX_DESCRIPTION_LEN: usize = 500;

/// What the invitation panel needs about the call that was just created.
#[derive(Clone, PartialEq)]
struct CreatedMeeting {
    link: String,
    scheduled_at: Option<String>,
    description: Option<String>,
}

struct MeetingForm {
    description: Option<String>,
    start_time: Option<String>,
    participants: Vec<String>,
}

/// Split a comma-separated email list, dropping empty entries.
pub fn split_emails(input: &str) -> Vec<String> {
    input
        .split(',')
        .filter_map(|s| {
            let s = s.trim().to_string();
            if s.is_empty() {
                None
            } else {
                Some(s)
            }
        })
        .collect()
}

async fn create_meeting(
    session: VideoSession,
    form: MeetingForm,
) -> Result<CreatedMeeting, String> {
    // The supplied participant list decides the policy, even if some
    // addresses fail to resolve.
    let call_type = CallType::for_participants(&form.participants);

    let participant_ids = if form.participants.is_empty() {
        Vec::new()
    } else {
        let actions = actions_client()?;
        actions
            .lookup_user_ids(&form.participants)
            .await
            .map_err(|e| format!("participant lookup failed: {e}"))?
    };
    let members = assemble_members(participant_ids, session.identity.user_id());

    let scheduled = form.start_time.as_deref().and_then(parse_datetime_local);
    let starts_at = scheduled.unwrap_or_else(Utc::now);

    let call_id = uuid::Uuid::new_v4().to_string();
    let data = CallData {
        starts_at: Some(starts_at),
        members,
        custom: CallCustom {
            description: form.description.clone(),
        },
    };
    session
        .client
        .get_or_create_call(call_type, &call_id, data)
        .await
        .map_err(|e| format!("call creation failed: {e}"))?;

    Ok(CreatedMeeting {
        link: invitation_link(&site_base_url()?, &call_id),
        scheduled_at: scheduled.map(format_locale),
        description: form.description,
    })
}

#[function_component(CreateMeetingPage)]
pub fn create_meeting_page() -> Html {
    let session = use_context::<VideoSessionCtx>()
        .expect("Video session provider is missing – this is a bug");

    let description_active = use_state(|| false);
    let description = use_state(String::new);
    let schedule_active = use_state(|| false);
    let start_time = use_state(String::new);
    let participants_active = use_state(|| false);
    let participants = use_state(String::new);

    let creating = use_state(|| false);
    let created = use_state(|| None as Option<CreatedMeeting>);
    let error = use_state(|| None as Option<String>);

    let identity = session.identity.clone();
    if !identity.is_principal() {
        return html! {
            <div class="home-page card">
                <h2>{ "Sign in to create a meeting" }</h2>
                <p>{ "Guests can join meetings from an invitation link." }</p>
            </div>
        };
    }

    let on_create = {
        let session = session.clone();
        let description_active = description_active.clone();
        let description = description.clone();
        let schedule_active = schedule_active.clone();
        let start_time = start_time.clone();
        let participants_active = participants_active.clone();
        let participants = participants.clone();
        let creating = creating.clone();
        let created = created.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            if *creating {
                return;
            }
            let form = MeetingForm {
                description: (*description_active)
                    .then(|| (*description).clone())
                    .filter(|d| !d.is_empty()),
                start_time: (*schedule_active)
                    .then(|| (*start_time).clone())
                    .filter(|t| !t.is_empty()),
                participants: if *participants_active {
                    split_emails(&participants)
                } else {
                    Vec::new()
                },
            };
            creating.set(true);
            error.set(None);

            let session = session.clone();
            let creating = creating.clone();
            let created = created.clone();
            let error = error.clone();
            spawn_local(async move {
                match create_meeting(session, form).await {
                    Ok(meeting) => created.set(Some(meeting)),
                    Err(e) => {
                        log::error!("Create meeting failed: {e}");
                        error.set(Some("Something went wrong. Please try again.".to_string()));
                    }
                }
                creating.set(false);
            });
        })
    };

    let on_description_toggle = {
        let description_active = description_active.clone();
        let description = description.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            description_active.set(input.checked());
            description.set(String::new());
        })
    };
    let on_description_input = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };
    let on_start_now = {
        let schedule_active = schedule_active.clone();
        let start_time = start_time.clone();
        Callback::from(move |_: Event| {
            schedule_active.set(false);
            start_time.set(String::new());
        })
    };
    let on_start_scheduled = {
        let schedule_active = schedule_active.clone();
        let start_time = start_time.clone();
        Callback::from(move |_: Event| {
            schedule_active.set(true);
            start_time.set(datetime_local_now());
        })
    };
    let on_start_time_input = {
        let start_time = start_time.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            start_time.set(input.value());
        })
    };
    let on_everyone = {
        let participants_active = participants_active.clone();
        let participants = participants.clone();
        Callback::from(move |_: Event| {
            participants_active.set(false);
            participants.set(String::new());
        })
    };
    let on_restricted = {
        let participants_active = participants_active.clone();
        Callback::from(move |_: Event| participants_active.set(true))
    };
    let on_participants_input = {
        let participants = participants.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            participants.set(input.value());
        })
    };

    html! {
        <div class="home-page">
            <h1>{ format!("Welcome {}", identity.display_name()) }</h1>
            <div class="create-meeting-card card">
                <h2>{ "Create a new meeting" }</h2>

                <div class="form-section">
                    <div class="form-section-title">{ "Meeting info" }</div>
                    <label class="form-check">
                        <input type="checkbox"
                               checked={*description_active}
                               onchange={on_description_toggle} />
                        { "Add description" }
                    </label>
                    {
                        if *description_active {
                            html! {
                                <label class="form-field">
                                    <span>{ "Description" }</span>
                                    <textarea
                                        value={(*description).clone()}
                                        oninput={on_description_input}
                                        maxlength={MAX_DESCRIPTION_LEN.to_string()} />
                                </label>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="form-section">
                    <div class="form-section-title">{ "Meeting start" }</div>
                    <label class="form-check">
                        <input type="radio" name="start"
                               checked={!*schedule_active}
                               onchange={on_start_now} />
                        { "Start meeting immediately" }
                    </label>
                    <label class="form-check">
                        <input type="radio" name="start"
                               checked={*schedule_active}
                               onchange={on_start_scheduled} />
                        { "Start meeting at date/time" }
                    </label>
                    {
                        if *schedule_active {
                            html! {
                                <label class="form-field">
                                    <span>{ "Start time" }</span>
                                    <input type="datetime-local"
                                           value={(*start_time).clone()}
                                           min={datetime_local_now()}
                                           oninput={on_start_time_input} />
                                </label>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="form-section">
                    <div class="form-section-title">{ "Participants" }</div>
                    <label class="form-check">
                        <input type="radio" name="participants"
                               checked={!*participants_active}
                               onchange={on_everyone} />
                        { "Everyone with the link can join" }
                    </label>
                    <label class="form-check">
                        <input type="radio" name="participants"
                               checked={*participants_active}
                               onchange={on_restricted} />
                        { "Private meeting" }
                    </label>
                    {
                        if *participants_active {
                            html! {
                                <label class="form-field">
                                    <span>{ "Participant emails" }</span>
                                    <textarea
                                        value={(*participants).clone()}
                                        oninput={on_participants_input}
                                        placeholder="Enter participant email addresses separated by commas" />
                                </label>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                {
                    if let Some(message) = &*error {
                        html! { <p class="form-error">{ message }</p> }
                    } else {
                        html! {}
                    }
                }

                <button class="btn btn-primary create-meeting-submit"
                        disabled={*creating}
                        onclick={on_create}>
                    { if *creating { "Creating…" } else { "Create Meeting" } }
                </button>
            </div>

            {
                if let Some(meeting) = &*created {
                    html! {
                        <MeetingLinkView
                            meeting_link={meeting.link.clone()}
                            scheduled_at={meeting.scheduled_at.clone()}
                            description={meeting.description.clone()} />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::split_emails;

    #[test]
    fn split_emails_trims_and_drops_empties() {
        let got = split_emails(" a@x.com, , b@x.com ,c@x.com,");
        assert_eq!(got, vec!["a@x.com", "b@x.com", "c@x.com"]);
    }

    #[test]
    fn split_emails_of_empty_input_is_empty() {
        assert!(split_emails("").is_empty());
        assert!(split_emails("  ,  ").is_empty());
    }
}
