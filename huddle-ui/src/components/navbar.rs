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

//! Top navigation bar.
//!
//! Shows a "New Meeting" home link, plus the signed-in display name or a
//! sign-in link. The sign-in surface itself belongs to the identity
//! provider; this bar only links to it.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::IdentityCtx;
use crate::identity::Identity;
use crate::routing::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let identity_ctx =
        use_context::<IdentityCtx>().expect("Identity context provider is missing – this is a bug");

    let identity_html = match &*identity_ctx {
        Some(Identity::Principal {
            name, avatar_url, ..
        }) => html! {
            <div class="navbar-user">
                {
                    if let Some(url) = avatar_url {
                        html! { <img class="navbar-avatar" src={url.clone()} alt="" /> }
                    } else {
                        html! {}
                    }
                }
                <span class="navbar-name">{ name }</span>
            </div>
        },
        Some(Identity::Guest { .. }) => html! {
            <a class="navbar-sign-in" href="/sign-in">{ "Sign in" }</a>
        },
        None => html! {},
    };

    html! {
        <header class="navbar">
            <Link<Route> to={Route::Home} classes="navbar-home">
                { "New Meeting" }
            </Link<Route>>
            { identity_html }
        </header>
    }
}
