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

//! Screen for a meeting whose scheduled start is still in the future.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routing::Route;

#[derive(Properties, Debug, PartialEq)]
pub struct UpcomingMeetingProps {
    /// Human-readable scheduled start time.
    pub starts_at: String,
    #[prop_or_default]
    pub description: Option<String>,
}

#[function_component(UpcomingMeeting)]
pub fn upcoming_meeting(props: &UpcomingMeetingProps) -> Html {
    html! {
        <div class="upcoming-meeting card">
            <p>
                { "This meeting has not started yet. It will start at " }
                <span class="upcoming-starts-at">{ &props.starts_at }</span>
            </p>
            {
                if let Some(description) = &props.description {
                    html! {
                        <p>
                            { "Description: " }
                            <span class="upcoming-description">{ description }</span>
                        </p>
                    }
                } else {
                    html! {}
                }
            }
            <Link<Route> to={Route::Home}>{ "Go Home" }</Link<Route>>
        </div>
    }
}
