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

//! Post-exit page, reached at `/meeting/:id/left` after leaving a call.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routing::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct LeftPageProps {
    pub id: String,
}

#[function_component(LeftPage)]
pub fn left_page(props: &LeftPageProps) -> Html {
    html! {
        <div class="left-page">
            <p class="left-page-message">{ "You left this meeting" }</p>
            <Link<Route>
                classes="left-page-rejoin"
                to={Route::Meeting { id: props.id.clone() }}>
                { "Rejoin" }
            </Link<Route>>
        </div>
    }
}
