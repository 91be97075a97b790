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

//! Huddle front-end entry point.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use huddle_ui::components::navbar::Navbar;
use huddle_ui::context::IdentityCtx;
use huddle_ui::identity::{self, Identity};
use huddle_ui::pages::home::CreateMeetingPage;
use huddle_ui::pages::left::LeftPage;
use huddle_ui::pages::meeting::MeetingPage;
use huddle_ui::provider::ClientProvider;
use huddle_ui::routing::Route;

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <CreateMeetingPage /> },
        Route::Meeting { id } => html! { <MeetingPage {id} /> },
        Route::MeetingLeft { id } => html! { <LeftPage {id} /> },
        Route::NotFound => html! { <h1>{ "404" }</h1> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let identity = use_state(|| None as Option<Identity>);

    // Resolve the identity once per browser session; everything below the
    // provider waits on it.
    {
        let identity = identity.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let resolved = identity::fetch_identity().await;
                identity.set(Some(resolved));
            });
            || ()
        });
    }

    html! {
        <ContextProvider<IdentityCtx> context={identity.clone()}>
            <BrowserRouter>
                <Navbar />
                <ClientProvider>
                    <Switch<Route> render={switch} />
                </ClientProvider>
            </BrowserRouter>
        </ContextProvider<IdentityCtx>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("error initializing logger");
    yew::Renderer::<App>::new().render();
}
