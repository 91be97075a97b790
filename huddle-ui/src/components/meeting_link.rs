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

//! Invitation panel shown after a meeting was created: the shareable link,
//! a copy-to-clipboard button, and a pre-filled email composition link.

use gloo_utils::window;
use yew::prelude::*;

use crate::link::mailto_invitation;

#[derive(Properties, Debug, PartialEq)]
pub struct MeetingLinkViewProps {
    pub meeting_link: String,
    /// Human-readable scheduled start, when the meeting was scheduled.
    #[prop_or_default]
    pub scheduled_at: Option<String>,
    #[prop_or_default]
    pub description: Option<String>,
}

#[function_component(MeetingLinkView)]
pub fn meeting_link_view(props: &MeetingLinkViewProps) -> Html {
    let copied = use_state(|| false);

    let on_copy = {
        let link = props.meeting_link.clone();
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            let _ = window().navigator().clipboard().write_text(&link);
            copied.set(true);
        })
    };

    let mailto = mailto_invitation(
        &props.meeting_link,
        props.scheduled_at.as_deref(),
        props.description.as_deref(),
    );

    html! {
        <div class="meeting-link-panel">
            <div class="meeting-link-row">
                <span>
                    { "Invitation link: " }
                    <a class="meeting-link" href={props.meeting_link.clone()}>
                        { &props.meeting_link }
                    </a>
                </span>
                <button class="btn meeting-link-copy" title="Copy Link" onclick={on_copy}>
                    { if *copied { "Copied" } else { "Copy" } }
                </button>
            </div>
            <a class="meeting-link-mailto" href={mailto}>
                { "Send email invitation" }
            </a>
        </div>
    }
}
