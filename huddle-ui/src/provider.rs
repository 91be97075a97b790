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

//! Video-service client provider.
//!
//! Acquires a [`VideoSession`] bound to the current identity and provides
//! it to the subtree. Acquisition and release are paired: the effect
//! releases the previous session before a new one is acquired, so two live
//! sessions never overlap. A completion that arrives after the identity
//! changed (or the provider unmounted) is dropped via the `alive` guard.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use huddle_client::{AuthMode, VideoServiceClient};

use crate::components::loading::Spinner;
use crate::constants::{actions_client, video_service_client};
use crate::context::{IdentityCtx, VideoSessionCtx};
use crate::identity::Identity;

/// A video-service client tied to one identity.
#[derive(Clone)]
pub struct VideoSession {
    pub identity: Identity,
    pub client: VideoServiceClient,
}

impl PartialEq for VideoSession {
    fn eq(&self, other: &Self) -> bool {
        // One session per identity; the client carries no comparable state.
        self.identity == other.identity
    }
}

async fn acquire_session(identity: Identity) -> Result<VideoSession, String> {
    let auth = if identity.is_principal() {
        // Principals present a minted call access token; the mint fails
        // closed (no retry) and the user has to sign in again.
        let actions = actions_client()?;
        let token = actions
            .mint_token()
            .await
            .map_err(|e| format!("token minting failed: {e}"))?;
        AuthMode::Bearer(token.token)
    } else {
        AuthMode::Anonymous
    };

    let client = video_service_client(auth)?;
    Ok(VideoSession { identity, client })
}

#[derive(Properties, PartialEq)]
pub struct ClientProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ClientProvider)]
pub fn client_provider(props: &ClientProviderProps) -> Html {
    let identity_ctx =
        use_context::<IdentityCtx>().expect("Identity context provider is missing – this is a bug");
    let session = use_state(|| None as Option<VideoSession>);
    let error = use_state(|| None as Option<String>);

    {
        let session = session.clone();
        let error = error.clone();
        use_effect_with(
            (*identity_ctx).clone(),
            move |identity: &Option<Identity>| {
                // Release the old session before acquiring the new one.
                session.set(None);
                error.set(None);

                let alive = Rc::new(Cell::new(true));
                if let Some(identity) = identity.clone() {
                    let alive = alive.clone();
                    spawn_local(async move {
                        let acquired = acquire_session(identity).await;
                        if !alive.get() {
                            // Stale completion: the identity changed or the
                            // provider unmounted while we were in flight.
                            return;
                        }
                        match acquired {
                            Ok(s) => session.set(Some(s)),
                            Err(e) => {
                                log::error!("Failed to acquire video session: {e}");
                                error.set(Some(
                                    "Could not connect to the video service.".to_string(),
                                ));
                            }
                        }
                    });
                }
                move || alive.set(false)
            },
        );
    }

    if let Some(message) = &*error {
        return html! {
            <div class="notice notice-error">
                <p>{ message }</p>
            </div>
        };
    }

    match &*session {
        Some(session) => html! {
            <ContextProvider<VideoSessionCtx> context={session.clone()}>
                { props.children.clone() }
            </ContextProvider<VideoSessionCtx>>
        },
        None => html! { <Spinner /> },
    }
}
